pub(crate) mod layout;
pub(crate) mod protected;
pub(crate) mod restricted;
