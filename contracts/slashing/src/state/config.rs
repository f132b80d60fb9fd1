use cw_controllers::Admin;

/// Account allowed to update the parameters, usually the chain's governance module.
pub(crate) const ADMIN: Admin = Admin::new("admin");
