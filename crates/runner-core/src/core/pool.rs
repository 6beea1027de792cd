//! Fixed-capacity entity pools.
//!
//! Transient entities (enemies, projectiles, explosions) recycle through
//! preallocated slots instead of allocating per spawn. A slot is either
//! live or free; spawning overwrites the first free slot, and exhaustion
//! drops the spawn silently, a soft ceiling rather than an error.

/// Implemented by anything stored in a [`Pool`].
pub trait PoolSlot {
    /// Whether this slot currently holds a live entity.
    fn is_active(&self) -> bool;
    /// Flip the live flag. Pool reset only clears the flag; slot state is
    /// rewritten wholesale on the next spawn.
    fn set_active(&mut self, active: bool);
}

/// Fixed-capacity collection of reusable entity slots.
///
/// Iteration runs in storage order, not spawn order: a recycled slot keeps
/// its index, so a later spawn may appear before an earlier one. The
/// first-free scan is linear, which is fine at these capacities.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: PoolSlot> Pool<T> {
    /// Create a pool of `capacity` free slots.
    pub fn new(capacity: usize) -> Self
    where
        T: Default,
    {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, T::default);
        Self { slots }
    }

    /// Activate the first free slot with the given state. Returns false
    /// and drops the spawn when every slot is live.
    pub fn spawn(&mut self, entity: T) -> bool {
        match self.slots.iter_mut().find(|slot| !slot.is_active()) {
            Some(slot) => {
                *slot = entity;
                slot.set_active(true);
                true
            }
            None => false,
        }
    }

    /// Free every slot. Runs on level load so no slot survives with stale
    /// cross-level state.
    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            slot.set_active(false);
        }
    }

    /// Iterate live entities.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.is_active())
    }

    /// Iterate live entities mutably.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| slot.is_active())
    }

    /// Number of live entities.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Marker {
        id: u32,
        active: bool,
    }

    impl PoolSlot for Marker {
        fn is_active(&self) -> bool {
            self.active
        }
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    fn live(id: u32) -> Marker {
        Marker { id, active: true }
    }

    #[test]
    fn spawn_fills_slots_up_to_capacity() {
        let mut pool: Pool<Marker> = Pool::new(3);
        assert!(pool.spawn(live(1)));
        assert!(pool.spawn(live(2)));
        assert!(pool.spawn(live(3)));
        assert_eq!(pool.active_count(), 3);
    }

    #[test]
    fn exhausted_pool_drops_spawns_silently() {
        let mut pool: Pool<Marker> = Pool::new(2);
        assert!(pool.spawn(live(1)));
        assert!(pool.spawn(live(2)));
        for id in 3..10 {
            assert!(!pool.spawn(live(id)), "spawn {id} should be dropped");
        }
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn deactivated_slot_is_recycled() {
        let mut pool: Pool<Marker> = Pool::new(2);
        pool.spawn(live(1));
        pool.spawn(live(2));

        for slot in pool.iter_active_mut() {
            if slot.id == 1 {
                slot.set_active(false);
            }
        }
        assert_eq!(pool.active_count(), 1);

        assert!(pool.spawn(live(3)));
        let ids: Vec<u32> = pool.iter_active().map(|slot| slot.id).collect();
        // The recycled slot keeps its storage position
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn reset_all_frees_every_slot() {
        let mut pool: Pool<Marker> = Pool::new(4);
        pool.spawn(live(1));
        pool.spawn(live(2));
        pool.reset_all();
        assert_eq!(pool.active_count(), 0);
        assert!(pool.iter_active().next().is_none());
    }

    #[test]
    fn iteration_skips_free_slots() {
        let mut pool: Pool<Marker> = Pool::new(4);
        pool.spawn(live(1));
        pool.spawn(live(2));
        pool.spawn(live(3));
        for slot in pool.iter_active_mut() {
            if slot.id == 2 {
                slot.set_active(false);
            }
        }
        let ids: Vec<u32> = pool.iter_active().map(|slot| slot.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
