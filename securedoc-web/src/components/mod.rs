pub(crate) mod alert;
pub(crate) mod loading;
