use std::sync::OnceLock;

use crate::types::NameMapping;

const MODULE_NAME_TO_PYPI_NAME: &[(&str, &str)] = &[
    ("AppKit", "pyobjc"),
    ("Bio", "biopython"),
    ("Crypto", "pycryptodome"),
    ("Cryptodome", "pycryptodomex"),
    ("Foundation", "pyobjc"),
    ("IPython", "ipython"),
    ("Levenshtein", "python-Levenshtein"),
    ("MySQLdb", "mysqlclient"),
    ("OpenGL", "PyOpenGL"),
    ("OpenSSL", "pyOpenSSL"),
    ("PIL", "pillow"),
    ("Xlib", "python-xlib"),
    ("attr", "attrs"),
    ("azure", "azure-core"),
    ("bs4", "beautifulsoup4"),
    ("cairo", "pycairo"),
    ("cv2", "opencv-python"),
    ("dateutil", "python-dateutil"),
    ("docx", "python-docx"),
    ("dotenv", "python-dotenv"),
    ("duckdb_engine", "duckdb-engine"),
    ("elasticsearch_dsl", "elasticsearch-dsl"),
    ("faiss", "faiss-cpu"),
    ("fitz", "PyMuPDF"),
    ("flask_cors", "flask-cors"),
    ("flask_sqlalchemy", "Flask-SQLAlchemy"),
    ("gi", "PyGObject"),
    ("git", "GitPython"),
    ("github", "PyGithub"),
    ("google_auth_oauthlib", "google-auth-oauthlib"),
    ("googleapiclient", "google-api-python-client"),
    ("grpc", "grpcio"),
    ("ibis", "ibis-framework"),
    ("jose", "python-jose"),
    ("jwt", "PyJWT"),
    ("kafka", "kafka-python"),
    ("ldap", "python-ldap"),
    ("lzo", "python-lzo"),
    ("magic", "python-magic"),
    ("mpl_toolkits", "matplotlib"),
    ("multipart", "python-multipart"),
    ("nacl", "PyNaCl"),
    ("objc", "pyobjc"),
    ("pkg_resources", "setuptools"),
    ("pptx", "python-pptx"),
    ("psycopg2", "psycopg2-binary"),
    ("pyarrow_hotfix", "pyarrow-hotfix"),
    ("pydantic_settings", "pydantic-settings"),
    ("pylab", "matplotlib"),
    ("serial", "pyserial"),
    ("skimage", "scikit-image"),
    ("sklearn", "scikit-learn"),
    ("slugify", "python-slugify"),
    ("snowflake", "snowflake-connector-python"),
    ("socks", "PySocks"),
    ("sqlalchemy_utils", "SQLAlchemy-Utils"),
    ("telegram", "python-telegram-bot"),
    ("tree_sitter", "tree-sitter"),
    ("usb", "pyusb"),
    ("vl_convert", "vl-convert-python"),
    ("win32api", "pywin32"),
    ("win32con", "pywin32"),
    ("win32gui", "pywin32"),
    ("wx", "wxPython"),
    ("yaml", "PyYAML"),
    ("zmq", "pyzmq"),
];

/// Import names whose PyPI distribution is published under another name.
#[must_use]
pub fn module_name_to_pypi_name() -> &'static NameMapping {
    static TABLE: OnceLock<NameMapping> = OnceLock::new();
    TABLE.get_or_init(|| MODULE_NAME_TO_PYPI_NAME.iter().copied().collect())
}
