//! Application services (driving ports).

pub mod tv_service;
