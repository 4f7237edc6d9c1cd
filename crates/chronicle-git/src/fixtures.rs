//! Throwaway repositories for adapter tests

use git2::{Commit, ObjectType, Oid, Repository, Signature, Time};
use tempfile::TempDir;

use crate::repository::GitRepo;

/// A scratch repository plus a clock that advances one minute per commit
pub(crate) struct ScratchRepo {
    pub temp: TempDir,
    pub repo: Repository,
    clock: i64,
}

impl ScratchRepo {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        Self {
            temp,
            repo,
            clock: 1_770_000_000,
        }
    }

    fn signature(&mut self) -> Signature<'static> {
        self.clock += 60;
        Signature::new("Test Author", "test@example.com", &Time::new(self.clock, 0)).unwrap()
    }

    /// Commit on top of HEAD (or as the root commit) and advance HEAD
    pub fn commit(&mut self, message: &str) -> Oid {
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .map(|c| c.id());
        match parent {
            Some(parent) => self.commit_with_parents(Some("HEAD"), message, &[parent]),
            None => self.commit_with_parents(Some("HEAD"), message, &[]),
        }
    }

    /// Commit with explicit parents, optionally updating a reference
    pub fn commit_with_parents(
        &mut self,
        update_ref: Option<&str>,
        message: &str,
        parents: &[Oid],
    ) -> Oid {
        let sig = self.signature();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents: Vec<Commit<'_>> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).unwrap())
            .collect();
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
        self.repo
            .commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    /// Commit a raw, possibly non-UTF-8, message on top of HEAD
    pub fn commit_bytes(&mut self, message: &[u8]) -> Oid {
        self.clock += 60;
        let head = self.repo.head().unwrap();
        let branch = head.name().unwrap().to_string();
        let parent = head.peel_to_commit().unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();

        let ident = format!("Test Author <test@example.com> {} +0000", self.clock);
        let mut raw = format!(
            "tree {}\nparent {}\nauthor {}\ncommitter {}\n\n",
            tree_id,
            parent.id(),
            ident,
            ident
        )
        .into_bytes();
        raw.extend_from_slice(message);

        let oid = self.repo.odb().unwrap().write(ObjectType::Commit, &raw).unwrap();
        self.repo.reference(&branch, oid, true, "raw commit").unwrap();
        oid
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn open(&self) -> GitRepo {
        GitRepo::open(self.temp.path()).unwrap()
    }
}
