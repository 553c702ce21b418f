use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Cursor, Read, Seek, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 由走訪產生的單一項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsMetadata {
    pub is_dir: bool,
}

/// 可讀取且可重新定位的檔案控制代碼
pub trait FsFile: Read + Seek {}

impl<T: Read + Seek> FsFile for T {}

pub type WalkIter<'a> = Box<dyn Iterator<Item = io::Result<FsEntry>> + 'a>;

/// 檔案系統能力，整理流程只透過它存取磁碟
pub trait FileSystem {
    /// 深度優先走訪 `root`（含 `root` 本身），同一層依檔名排序
    fn walk<'a>(&'a self, root: &Path) -> WalkIter<'a>;

    fn open(&self, path: &Path) -> io::Result<Box<dyn FsFile>>;

    fn metadata(&self, path: &Path) -> io::Result<FsMetadata>;

    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// 建立新檔並寫入內容，檔案已存在時回傳 `AlreadyExists`
    fn write_new(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// 實體檔案系統
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFs;

impl OsFs {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFs {
    fn walk<'a>(&'a self, root: &Path) -> WalkIter<'a> {
        let entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                entry
                    .map(|entry| FsEntry {
                        is_dir: entry.file_type().is_dir(),
                        path: entry.into_path(),
                    })
                    .map_err(io::Error::from)
            });
        Box::new(entries)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn FsFile>> {
        Ok(Box::new(File::open(path)?))
    }

    fn metadata(&self, path: &Path) -> io::Result<FsMetadata> {
        let metadata = fs::metadata(path)?;
        Ok(FsMetadata {
            is_dir: metadata.is_dir(),
        })
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(content)?;
        file.sync_all()
    }
}

#[derive(Debug, Clone)]
enum MemNode {
    Dir,
    File(Vec<u8>),
    /// 無法列出內容的資料夾，用來模擬權限錯誤
    Unreadable,
}

/// 記憶體內的檔案系統，僅供單執行緒使用
///
/// 路徑依字面比對，呼叫端需一致地使用絕對路徑。
#[derive(Debug, Default)]
pub struct MemFs {
    nodes: RefCell<BTreeMap<PathBuf, MemNode>>,
}

impl MemFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.borrow_mut();
        Self::insert_ancestors(&mut nodes, path.as_ref());
        nodes
            .entry(path.as_ref().to_path_buf())
            .or_insert(MemNode::Dir);
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let mut nodes = self.nodes.borrow_mut();
        Self::insert_ancestors(&mut nodes, path.as_ref());
        nodes.insert(path.as_ref().to_path_buf(), MemNode::File(content.into()));
    }

    /// 新增一個走訪時會回報權限錯誤的資料夾
    pub fn add_unreadable_dir(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.borrow_mut();
        Self::insert_ancestors(&mut nodes, path.as_ref());
        nodes.insert(path.as_ref().to_path_buf(), MemNode::Unreadable);
    }

    #[must_use]
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(MemNode::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// 列出 `root` 底下所有檔案路徑（依序）
    #[must_use]
    pub fn files_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(path, node)| {
                matches!(node, MemNode::File(_)) && path.starts_with(root.as_ref())
            })
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn insert_ancestors(nodes: &mut BTreeMap<PathBuf, MemNode>, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes
                .entry(ancestor.to_path_buf())
                .or_insert(MemNode::Dir);
        }
    }

    fn collect_entries(
        nodes: &BTreeMap<PathBuf, MemNode>,
        path: &Path,
        out: &mut Vec<io::Result<FsEntry>>,
    ) {
        match nodes.get(path) {
            None => out.push(Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            ))),
            Some(MemNode::File(_)) => out.push(Ok(FsEntry {
                path: path.to_path_buf(),
                is_dir: false,
            })),
            Some(MemNode::Unreadable) => {
                out.push(Ok(FsEntry {
                    path: path.to_path_buf(),
                    is_dir: true,
                }));
                out.push(Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("permission denied: {}", path.display()),
                )));
            }
            Some(MemNode::Dir) => {
                out.push(Ok(FsEntry {
                    path: path.to_path_buf(),
                    is_dir: true,
                }));
                let children: Vec<&PathBuf> = nodes
                    .keys()
                    .filter(|child| child.parent() == Some(path))
                    .collect();
                for child in children {
                    Self::collect_entries(nodes, child, out);
                }
            }
        }
    }
}

impl FileSystem for MemFs {
    fn walk<'a>(&'a self, root: &Path) -> WalkIter<'a> {
        // 先取快照，走訪期間的寫入不會影響迭代
        let mut entries = Vec::new();
        Self::collect_entries(&self.nodes.borrow(), root, &mut entries);
        Box::new(entries.into_iter())
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn FsFile>> {
        match self.nodes.borrow().get(path) {
            Some(MemNode::File(content)) => Ok(Box::new(Cursor::new(content.clone()))),
            Some(_) => Err(io::Error::other(format!(
                "is a directory: {}",
                path.display()
            ))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )),
        }
    }

    fn metadata(&self, path: &Path) -> io::Result<FsMetadata> {
        match self.nodes.borrow().get(path) {
            Some(MemNode::File(_)) => Ok(FsMetadata { is_dir: false }),
            Some(MemNode::Dir | MemNode::Unreadable) => Ok(FsMetadata { is_dir: true }),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            )),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(file) = path
            .ancestors()
            .find(|ancestor| matches!(nodes.get(*ancestor), Some(MemNode::File(_))))
        {
            return Err(io::Error::other(format!(
                "not a directory: {}",
                file.display()
            )));
        }
        Self::insert_ancestors(&mut nodes, path);
        nodes.entry(path.to_path_buf()).or_insert(MemNode::Dir);
        Ok(())
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        if nodes.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("file exists: {}", path.display()),
            ));
        }
        let parent_is_dir = path
            .parent()
            .is_some_and(|parent| matches!(nodes.get(parent), Some(MemNode::Dir)));
        if !parent_is_dir {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory missing: {}", path.display()),
            ));
        }
        nodes.insert(path.to_path_buf(), MemNode::File(content.to_vec()));
        Ok(())
    }
}
