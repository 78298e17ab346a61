/// HTTP middleware
///
/// Cross-cutting request/response concerns layered onto the router in
/// `app::build_router`. Authentication lives in `careermantra_shared::auth`
/// and is wired up as a per-group layer there.
pub mod security;
