use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use super::Scene;

/// Scene handle shared by the tick thread and the render path.
///
/// Ticks always wait for the lock. Frames never do: if a tick holds the
/// scene when a frame starts, [`try_frame`](Self::try_frame) returns
/// `None` and the frame is dropped.
#[derive(Debug, Clone)]
pub struct SharedScene {
    inner: Arc<Mutex<Scene>>,
}

impl SharedScene {
    /// Wrap a scene for sharing.
    pub fn new(scene: Scene) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scene)),
        }
    }

    /// Block until the scene is free. A poisoned lock is recovered; the
    /// scene holds no invariants a panicking tick could break halfway.
    pub fn lock(&self) -> MutexGuard<'_, Scene> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("scene lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Run one tick under the lock.
    pub fn tick(&self) {
        self.lock().tick();
    }

    /// The scene, if no tick is running.
    pub fn try_frame(&self) -> Option<MutexGuard<'_, Scene>> {
        match self.inner.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::WouldBlock) => {
                log::trace!("scene busy, frame dropped");
                None
            }
            Err(TryLockError::Poisoned(poisoned)) => {
                log::warn!("scene lock poisoned, recovering");
                Some(poisoned.into_inner())
            }
        }
    }

    /// Run `f` with the scene locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Scene) -> R) -> R {
        f(&mut *self.lock())
    }
}
