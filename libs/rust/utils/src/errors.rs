//env
pub const SERVER_ADDR_INVALID: &str = "TENANT_SERVER_ADDR is not a valid socket address";

//tenant
pub const TENANT_LOAD_FAILED: &str = "Failed to load tenant";
pub const TENANT_PREVIEW_FAILED: &str = "Failed to set up dev tenant preview";

//server
pub const SERVER_BIND_FAILED: &str = "Failed to bind tenant server";
pub const SERVER_FAILED: &str = "Tenant server error";
