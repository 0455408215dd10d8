//! Platform plumbing shared by the page: storage, document attributes, frame timing.

pub mod document;
pub mod platform;
pub mod storage;
pub mod timing;
