mod review;
mod turf;
mod user;
