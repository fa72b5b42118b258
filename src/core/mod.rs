/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod account;
pub mod client;
pub mod cloud_region;
pub mod cloud_service;
pub mod connection;
pub mod connection_type;
pub mod datetime;
pub mod errors;
pub mod filter;
pub mod inventory;
pub mod json;
pub mod link;
pub mod location;
pub mod network;
pub mod utils;
