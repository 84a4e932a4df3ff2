pub(crate) mod hygiene;
pub(crate) mod iv;
pub(crate) mod prp;
pub(crate) mod spongos;
