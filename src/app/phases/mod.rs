pub(super) mod phase_view;

pub(super) mod home;
pub(super) mod market;
pub(super) mod not_found;
pub(super) mod trade;

pub(crate) use phase_view::PhaseView;
