#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use release_tag::domain::{Version, VersionSnapshot};
use release_tag::editor::Editor;
use release_tag::git::CommitInfo;
use release_tag::ui::Prompt;
use release_tag::version::VersionSource;
use release_tag::Result;

pub const DESCRIPTOR: &str = "version.toml";

pub fn commit(hash: &str, message: &str) -> CommitInfo {
    CommitInfo {
        hash: hash.to_string(),
        message: message.to_string(),
        author: "Test Author".to_string(),
    }
}

/// Editor that records the paths it was opened on and changes nothing itself
#[derive(Default)]
pub struct ScriptedEditor {
    pub opened: RefCell<Vec<PathBuf>>,
}

impl ScriptedEditor {
    pub fn launches(&self) -> usize {
        self.opened.borrow().len()
    }
}

impl Editor for ScriptedEditor {
    fn launch(&self, path: &Path) -> Result<Option<i32>> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(Some(0))
    }
}

/// Version source whose descriptor switches to `after_edit` on reload
pub struct ScriptedVersions {
    path: PathBuf,
    current: Version,
    after_edit: Option<Version>,
    pub reloads: usize,
}

impl ScriptedVersions {
    pub fn new(current: Version) -> Self {
        ScriptedVersions {
            path: PathBuf::from(DESCRIPTOR),
            current,
            after_edit: None,
            reloads: 0,
        }
    }

    pub fn edited_to(mut self, next: Version) -> Self {
        self.after_edit = Some(next);
        self
    }
}

impl VersionSource for ScriptedVersions {
    fn descriptor_path(&self) -> &Path {
        &self.path
    }

    fn current(&self) -> VersionSnapshot {
        self.current.snapshot()
    }

    fn reload(&mut self) -> Result<VersionSnapshot> {
        self.reloads += 1;
        if let Some(next) = self.after_edit.take() {
            self.current = next;
        }
        Ok(self.current.snapshot())
    }
}

/// Prompt that acknowledges immediately
#[derive(Default)]
pub struct AutoAck {
    pub prompts: Cell<usize>,
}

impl Prompt for AutoAck {
    fn acknowledge(&self, _message: &str) -> Result<()> {
        self.prompts.set(self.prompts.get() + 1);
        Ok(())
    }
}
