pub(crate) mod callbacks;
pub(crate) mod cd;
pub(crate) mod gd;
pub(crate) mod lbfgs;
pub(crate) mod outcome;
pub(crate) mod trace;
