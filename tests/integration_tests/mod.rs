mod payments;
mod transport;
mod vault;
