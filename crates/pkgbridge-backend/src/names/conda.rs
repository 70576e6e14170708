use std::sync::OnceLock;

use crate::types::NameMapping;

const MODULE_NAME_TO_CONDA_NAME: &[(&str, &str)] = &[
    ("Bio", "biopython"),
    ("Crypto", "pycryptodome"),
    ("Cryptodome", "pycryptodomex"),
    ("IPython", "ipython"),
    ("Levenshtein", "levenshtein"),
    ("MySQLdb", "mysqlclient"),
    ("OpenGL", "pyopengl"),
    ("OpenSSL", "pyopenssl"),
    ("PIL", "pillow"),
    ("attr", "attrs"),
    ("bs4", "beautifulsoup4"),
    ("cairo", "pycairo"),
    ("cv2", "py-opencv"),
    ("dateutil", "python-dateutil"),
    ("docx", "python-docx"),
    ("dotenv", "python-dotenv"),
    ("faiss", "faiss-cpu"),
    ("fitz", "pymupdf"),
    ("gi", "pygobject"),
    ("git", "gitpython"),
    ("github", "pygithub"),
    ("googleapiclient", "google-api-python-client"),
    ("graphviz", "python-graphviz"),
    ("grpc", "grpcio"),
    ("ibis", "ibis-framework"),
    ("jwt", "pyjwt"),
    ("magic", "python-magic"),
    ("mpl_toolkits", "matplotlib"),
    ("nacl", "pynacl"),
    ("pkg_resources", "setuptools"),
    ("pptx", "python-pptx"),
    ("pylab", "matplotlib"),
    ("serial", "pyserial"),
    ("skimage", "scikit-image"),
    ("sklearn", "scikit-learn"),
    ("slugify", "python-slugify"),
    ("snowflake", "snowflake-connector-python"),
    ("socks", "pysocks"),
    ("tables", "pytables"),
    ("torch", "pytorch"),
    ("usb", "pyusb"),
    ("vl_convert", "vl-convert-python"),
    ("win32api", "pywin32"),
    ("wx", "wxpython"),
    ("yaml", "pyyaml"),
    ("zmq", "pyzmq"),
];

/// Import names whose conda-forge package is published under another name.
#[must_use]
pub fn module_name_to_conda_name() -> &'static NameMapping {
    static TABLE: OnceLock<NameMapping> = OnceLock::new();
    TABLE.get_or_init(|| MODULE_NAME_TO_CONDA_NAME.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{MODULE_NAME_TO_CONDA_NAME, module_name_to_conda_name};

    #[test]
    fn conda_names_differ_from_pypi_where_expected() {
        let table = module_name_to_conda_name();

        assert_eq!(table.get("cv2"), Some(&"py-opencv"));
        assert_eq!(table.get("torch"), Some(&"pytorch"));
        assert_eq!(table.get("tables"), Some(&"pytables"));
    }

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = MODULE_NAME_TO_CONDA_NAME.iter().map(|(module, _)| *module).collect();

        assert_eq!(keys.len(), MODULE_NAME_TO_CONDA_NAME.len());
    }
}
