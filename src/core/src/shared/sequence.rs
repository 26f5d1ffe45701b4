/// Monotonic id source for records created during the simulation.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn starting_at(next: u32) -> Self {
        IdSequence { next }
    }

    /// Continue after the largest id already in use.
    pub fn after<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        let max = ids.into_iter().max().unwrap_or(0);
        IdSequence::starting_at(max + 1)
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        IdSequence::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continues_after_existing_ids() {
        let mut sequence = IdSequence::after(vec![4, 9, 2]);

        assert_eq!(sequence.next_id(), 10);
        assert_eq!(sequence.next_id(), 11);
    }

    #[test]
    fn empty_starts_at_one() {
        let mut sequence = IdSequence::after(Vec::new());

        assert_eq!(sequence.next_id(), 1);
    }
}
