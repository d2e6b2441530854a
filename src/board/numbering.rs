//! Diagonal task numbering.
//!
//! Lanes are columns and tasks are rows. Numbers are handed out one
//! anti-diagonal at a time (`lane + row = d`), lane 0 first within a
//! diagonal, so the lowest numbers cluster in the top-left corner.

use super::lane::Lane;

/// Assign display numbers `1..=N` to every task across `lanes`.
///
/// Returns the number of tasks numbered.
pub fn number_diagonally(lanes: &mut [Lane]) -> usize {
    // One past the last diagonal that still touches a task.
    let diagonals = lanes
        .iter()
        .enumerate()
        .map(|(i, lane)| i + lane.tasks.len())
        .max()
        .unwrap_or(0);

    let mut next = 1;
    for d in 0..diagonals {
        for lane_i in 0..=d {
            let task_i = d - lane_i;
            let Some(lane) = lanes.get_mut(lane_i) else {
                break;
            };
            if let Some(task) = lane.tasks.get_mut(task_i) {
                task.number = Some(next);
                next += 1;
            }
        }
    }

    next - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::lane::Task;

    fn lane_with(name: &str, count: usize) -> Lane {
        let mut lane = Lane::new(name);
        for i in 0..count {
            lane.tasks.push(Task::new(format!("{} {}", name, i), None));
        }
        lane
    }

    fn numbers(lanes: &[Lane]) -> Vec<Vec<usize>> {
        lanes
            .iter()
            .map(|l| l.tasks.iter().map(|t| t.number.unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_todo_doing_done() {
        let mut lanes = vec![lane_with("Todo", 2), lane_with("Doing", 1), lane_with("Done", 0)];

        let count = number_diagonally(&mut lanes);

        assert_eq!(count, 3);
        assert_eq!(numbers(&lanes), vec![vec![1, 2], vec![3], vec![]]);
    }

    #[test]
    fn test_square_board() {
        let mut lanes = vec![lane_with("a", 3), lane_with("b", 3), lane_with("c", 3)];

        number_diagonally(&mut lanes);

        // d0: a0 | d1: a1 b0 | d2: a2 b1 c0 | d3: b2 c1 | d4: c2
        assert_eq!(
            numbers(&lanes),
            vec![vec![1, 2, 4], vec![3, 5, 7], vec![6, 8, 9]]
        );
    }

    #[test]
    fn test_gaps_do_not_consume_numbers() {
        let mut lanes = vec![lane_with("a", 0), lane_with("b", 0), lane_with("c", 2)];

        let count = number_diagonally(&mut lanes);

        assert_eq!(count, 2);
        assert_eq!(numbers(&lanes), vec![vec![], vec![], vec![1, 2]]);
    }

    #[test]
    fn test_contiguous_and_diagonal_order() {
        let counts = [4, 0, 7, 1, 3, 5];
        let mut lanes: Vec<Lane> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| lane_with(&format!("lane{}", i), c))
            .collect();

        let total = number_diagonally(&mut lanes);
        assert_eq!(total, counts.iter().sum::<usize>());

        let mut seen: Vec<(usize, usize, usize)> = Vec::new();
        for (li, lane) in lanes.iter().enumerate() {
            for (ti, task) in lane.tasks.iter().enumerate() {
                seen.push((task.number.unwrap(), li + ti, li));
            }
        }
        seen.sort();

        let assigned: Vec<usize> = seen.iter().map(|s| s.0).collect();
        assert_eq!(assigned, (1..=total).collect::<Vec<_>>());

        // Increasing numbers walk (diagonal, lane) in lexicographic order.
        for pair in seen.windows(2) {
            assert!((pair[0].1, pair[0].2) < (pair[1].1, pair[1].2));
        }
    }

    #[test]
    fn test_no_lanes() {
        let mut lanes: Vec<Lane> = Vec::new();
        assert_eq!(number_diagonally(&mut lanes), 0);
    }
}
