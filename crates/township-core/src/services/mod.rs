//! Domain services.
//!
//! Each service validates business rules, turns missing rows into
//! [`Error::NotFound`](crate::Error::NotFound), and delegates to its
//! persistence port. Collaborators are injected through `new`; services keep
//! no state of their own and re-read storage on every call.

mod allotment;
mod building;
mod citizen;
mod house;

pub use allotment::AllotmentService;
pub use building::{BuildingService, ensure_allotment_vacant};
pub use citizen::CitizenService;
pub use house::HouseService;

#[cfg(test)]
mod fakes;
