pub(crate) mod login_flow;
pub(crate) mod navigation;
