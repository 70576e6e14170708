mod error;
pub mod names;
mod traits;
mod types;

pub use error::{BackendError, InstallerError};
pub use names::{module_name_mapping, module_name_to_conda_name, module_name_to_pypi_name};
pub use traits::{CommandRunner, PackageManager, PackageManagerClone, ScriptMetadataManager};
pub use types::{
    CommandOutput, NameMapping, PackageDescription, PackageFamily, ScriptMetadataUpdate,
    VersionMap, parse_package_list,
};
