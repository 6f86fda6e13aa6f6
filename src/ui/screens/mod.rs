mod home;
mod market;
mod not_found;
mod trade;
