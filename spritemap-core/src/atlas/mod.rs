pub(crate) mod io;
pub(crate) mod model;
pub(crate) mod names;
