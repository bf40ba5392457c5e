pub(crate) mod roll;
