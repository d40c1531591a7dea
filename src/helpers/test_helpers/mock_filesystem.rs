use super::*;

#[derive(Debug)]
struct MockFilesystemInner {
    files: HashMap<String, String>,
    read_only: bool,
}

/// In-memory filesystem. Clones share the same files, so a test can keep one handle and give a
/// boxed copy to the code under test.
#[derive(Debug, Clone)]
pub struct MockFilesystem(Arc<Mutex<MockFilesystemInner>>);

impl MockFilesystem {
    pub fn new() -> Self {
        MockFilesystem(Arc::new(Mutex::new(MockFilesystemInner {
            files: HashMap::new(),
            read_only: false,
        })))
    }

    pub fn add_file(self, path: &str, contents: &str) -> Self {
        self.0
            .lock()
            .unwrap()
            .files
            .insert(path.to_string(), contents.to_string());
        self
    }

    /// Makes every write fail with PermissionDenied
    pub fn read_only(self) -> Self {
        self.0.lock().unwrap().read_only = true;
        self
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().files.get(path).cloned()
    }

    pub fn boxed(&self) -> Filesystem {
        Box::new(self.clone())
    }
}

impl FilesystemTrait for MockFilesystem {
    fn is_file(&self, path: &str) -> bool {
        self.0.lock().unwrap().files.contains_key(path)
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        match self.0.lock().unwrap().files.get(path) {
            Some(contents) => Ok(contents.clone()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            )),
        }
    }

    fn write_string(&self, path: &str, contents: &str) -> std::io::Result<()> {
        let mut fs = self.0.lock().unwrap();
        if fs.read_only {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "filesystem is read only",
            ));
        }
        fs.files.insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
