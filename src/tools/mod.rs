mod capture_time;
mod destination;
mod fs;
mod guarded_copy;
mod path_validator;

pub use capture_time::{capture_time, decode_metadata};
pub use destination::destination_path;
pub use fs::{FileSystem, FsEntry, FsFile, FsMetadata, MemFs, OsFs, WalkIter};
pub use guarded_copy::copy_guarded;
pub use path_validator::{FLAGS_NOT_SET, check_dir_flag};
