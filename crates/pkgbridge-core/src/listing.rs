use log::{debug, warn};

use pkgbridge_backend::{CommandRunner, PackageDescription, parse_package_list};

/// Run a JSON listing command and parse its `[{name, version}]` output.
///
/// A spawn failure, a non-zero exit, malformed JSON or an unexpected shape
/// all yield an empty list; a partial listing is never returned.
pub async fn list_packages_from_command(
    runner: &dyn CommandRunner,
    argv: &[&str],
) -> Vec<PackageDescription> {
    let output = match runner.output(argv).await {
        Ok(output) => output,
        Err(error) => {
            warn!("Listing command {argv:?} could not run: {error}");
            return Vec::new();
        }
    };

    let stdout = match output.into_stdout() {
        Ok(stdout) => stdout,
        Err(error) => {
            debug!("Listing command {argv:?} failed: {error}");
            return Vec::new();
        }
    };

    match parse_package_list(&stdout) {
        Ok(packages) => {
            debug!("Listing command {argv:?} returned {} packages", packages.len());
            packages
        }
        Err(error) => {
            warn!("Listing command {argv:?} produced unusable output: {error}");
            Vec::new()
        }
    }
}
