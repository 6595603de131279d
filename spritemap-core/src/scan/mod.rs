pub(crate) mod guide;
pub(crate) mod marker;
pub(crate) mod scanner;
