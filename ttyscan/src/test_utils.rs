//! Simulated `/dev` and `/sys` trees for unit tests.

use {
    crate::sysfs::SysfsLayout,
    std::{fs, os::unix::fs::symlink, path::PathBuf},
    tempfile::TempDir,
};

/// A temporary host with `dev/` and `sys/` roots.
///
/// Devices live under `sys/devices/<rel>`; tty class entries are real
/// directories under `sys/class/tty/<name>` whose `device` entry is a symlink
/// into the devices tree.
pub(crate) struct FakeHost {
    dir: TempDir,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::with_prefix(".tmp")
    }

    /// Like [`FakeHost::new`], with the temporary root named `<prefix>XXXXXX`.
    pub(crate) fn with_prefix(prefix: &str) -> Self {
        let _ = env_logger::builder()
            .is_test(true)
            .try_init();

        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .unwrap();
        fs::create_dir_all(dir.path().join("dev")).unwrap();
        fs::create_dir_all(dir.path().join("sys/class/tty")).unwrap();
        fs::create_dir_all(dir.path().join("sys/devices")).unwrap();
        Self { dir }
    }

    pub(crate) fn layout(&self) -> SysfsLayout {
        SysfsLayout::new(self.path("dev"), self.path("sys"))
    }

    /// Create a device node and return its path.
    pub(crate) fn add_node(&self, name: &str) -> String {
        let node = self.dir.path().join("dev").join(name);
        fs::write(&node, "").unwrap();
        node.to_string_lossy().into_owned()
    }

    /// Point `sys/class/tty/<name>/device` at `sys/devices/<target>`.
    pub(crate) fn link_tty(&self, name: &str, target: &str) {
        let device = self.device_dir(target);
        fs::create_dir_all(&device).unwrap();

        let class_dir = self.dir.path().join("sys/class/tty").join(name);
        fs::create_dir_all(&class_dir).unwrap();
        symlink(&device, class_dir.join("device")).unwrap();
    }

    /// Write attribute files into `sys/devices/<rel>`.
    pub(crate) fn write_attrs(&self, rel: &str, attrs: &[(&str, &str)]) {
        let device = self.device_dir(rel);
        fs::create_dir_all(&device).unwrap();

        for (file, value) in attrs {
            let content = if value.is_empty() {
                String::new()
            } else {
                format!("{value}\n")
            };
            fs::write(device.join(file), content).unwrap();
        }
    }

    /// Remove `sys/devices/<rel>`, leaving any class links dangling.
    pub(crate) fn remove_device(&self, rel: &str) {
        fs::remove_dir_all(self.device_dir(rel)).unwrap();
    }

    fn device_dir(&self, rel: &str) -> PathBuf {
        self.dir.path().join("sys/devices").join(rel)
    }

    fn path(&self, rel: &str) -> String {
        self.dir
            .path()
            .join(rel)
            .to_string_lossy()
            .into_owned()
    }
}
