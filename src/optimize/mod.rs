pub(crate) mod budget;
pub(crate) mod hill_climb;
pub(crate) mod perturb;
