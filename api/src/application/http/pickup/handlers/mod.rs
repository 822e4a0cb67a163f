pub mod suggest_pickup;
