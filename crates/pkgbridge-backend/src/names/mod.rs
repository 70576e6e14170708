mod conda;
mod pypi;

pub use conda::module_name_to_conda_name;
pub use pypi::module_name_to_pypi_name;

use crate::types::{NameMapping, PackageFamily};

/// The module name table a backend of `family` consults.
#[must_use]
pub fn module_name_mapping(family: PackageFamily) -> &'static NameMapping {
    match family {
        PackageFamily::Pypi => module_name_to_pypi_name(),
        PackageFamily::Conda => module_name_to_conda_name(),
    }
}
