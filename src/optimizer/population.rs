//! Fixed-size, best-first population.

use crate::solution::SolutionWithScore;

/// A generation: scored solutions sorted by descending score.
///
/// The size never changes after construction. A newcomer only gets in by
/// beating an existing member, and pushes out the current worst.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<SolutionWithScore>,
}

impl Population {
    /// Fills a population of `size` copies of `seed`.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn uniform(seed: SolutionWithScore, size: usize) -> Self {
        assert!(size > 0, "population size must be at least 1");
        Self {
            members: vec![seed; size],
        }
    }

    /// The highest-scoring member.
    pub fn best(&self) -> &SolutionWithScore {
        &self.members[0]
    }

    /// All members, best first.
    pub fn members(&self) -> &[SolutionWithScore] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Offers `candidate` to the population; returns whether it was kept.
    ///
    /// The insertion point is the first member scoring strictly lower than
    /// the candidate. The candidate is rejected if there is no such member,
    /// if the member at the insertion point or just before it holds the
    /// same solution, or if any member with an equal score does. Otherwise
    /// it is inserted and the last member dropped.
    pub fn try_insert(&mut self, candidate: SolutionWithScore) -> bool {
        let Some(position) = self
            .members
            .iter()
            .position(|member| member.score() < candidate.score())
        else {
            return false;
        };

        let same = |member: &SolutionWithScore| member.solution() == candidate.solution();
        let duplicate = same(&self.members[position])
            || (position > 0 && same(&self.members[position - 1]))
            || self.members[..position]
                .iter()
                .rev()
                .take_while(|member| member.score() == candidate.score())
                .any(same);
        if duplicate {
            return false;
        }

        self.members.insert(position, candidate);
        self.members.pop();
        true
    }

    /// Consumes the population and returns its best member.
    pub fn into_best(mut self) -> SolutionWithScore {
        self.members.swap_remove(0)
    }
}
