//! Clients for the various Worldpay Total APIs.

use crate::{codec, gateway::Gateway, Error};
use serde_json::{Map, Value};
use std::fmt::{Debug, Formatter};

pub mod payments;
pub mod recurring;
pub mod reporting;
pub mod settlement;
pub mod tokenization;
pub mod vault;

pub(crate) struct WorldpayClientInner {
    pub(crate) gateway: Gateway,
}

impl WorldpayClientInner {
    /// Stamps the configured public key into `payload` under `publicKey`, unless already set.
    pub(crate) fn stamp_public_key(&self, payload: &mut Map<String, Value>) -> Result<(), Error> {
        match self.gateway.configuration().public_key {
            Some(ref public_key) => codec::stamp(payload, "publicKey", public_key),
            None => Ok(()),
        }
    }
}

impl Debug for WorldpayClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldpayClientInner")
            .field("gateway", &self.gateway)
            .finish()
    }
}
