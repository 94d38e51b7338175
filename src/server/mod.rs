pub mod rsvp_route;
pub mod server;
