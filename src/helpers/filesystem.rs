/// A mockable interface to the filesystem
pub trait FilesystemTrait {
    /// Like std::path::Path::is_file()
    fn is_file(&self, path: &str) -> bool;
    /// Like std::fs::read_to_string()
    fn read_to_string(&self, path: &str) -> std::io::Result<String>;
    /// Like std::fs::write(), replaces the file if it already exists
    fn write_string(&self, path: &str, contents: &str) -> std::io::Result<()>;
}

pub type Filesystem = Box<dyn FilesystemTrait>;

pub fn real_filesystem() -> Filesystem {
    Box::new(FilesystemImpl)
}

struct FilesystemImpl;

impl FilesystemTrait for FilesystemImpl {
    fn is_file(&self, path: &str) -> bool {
        std::path::Path::new(path).is_file()
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_string(&self, path: &str, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_path(parts: &[&str]) -> String {
        let mut buf = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        for part in parts {
            buf.push(part);
        }
        buf.to_str().unwrap().to_string()
    }

    fn scratch_path(name: &str) -> String {
        let mut buf = std::env::temp_dir();
        buf.push(format!("lagrange-probe-{}-{}", std::process::id(), name));
        buf.to_str().unwrap().to_string()
    }

    #[test]
    fn manifest_is_file() {
        let io = real_filesystem();
        assert!(io.is_file(&workspace_path(&["Cargo.toml"])));
    }

    #[test]
    fn directory_is_not_file() {
        let io = real_filesystem();
        assert!(!io.is_file(&workspace_path(&["src"])));
    }

    #[test]
    fn can_read_manifest() {
        let io = real_filesystem();
        let contents = io
            .read_to_string(&workspace_path(&["Cargo.toml"]))
            .unwrap();
        assert!(contents.starts_with("[package]\n"));
    }

    #[test]
    fn reading_missing_file_is_not_found() {
        let io = real_filesystem();
        let err = io
            .read_to_string(&workspace_path(&["not-a-file.txt"]))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn written_file_can_be_read_back() {
        let path = scratch_path("write-read.json");
        let io = real_filesystem();
        io.write_string(&path, "[1, 2, 3]").unwrap();
        assert!(io.is_file(&path));
        assert_eq!(io.read_to_string(&path).unwrap(), "[1, 2, 3]");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn writing_replaces_old_contents() {
        let path = scratch_path("replace.txt");
        let io = real_filesystem();
        io.write_string(&path, "a much longer first version").unwrap();
        io.write_string(&path, "short").unwrap();
        assert_eq!(io.read_to_string(&path).unwrap(), "short");
        std::fs::remove_file(&path).unwrap();
    }
}
