mod category;
mod fact;
mod user;
mod vote;
