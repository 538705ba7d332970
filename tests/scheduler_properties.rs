use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use taskdag::dag::{TaskDescriptor, schedule};
use taskdag::types::compare_due;

// Due date pool: a handful of real dates plus missing and unparseable ones,
// so ties are common.
fn due_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("not a date".to_string())),
        (1..=5u32).prop_map(|d| Some(format!("2024-01-{d:02}"))),
    ]
}

// Strategy to generate an acyclic task set.
// We ensure acyclicity by only allowing task N to depend on tasks 0..N-1.
// Titles get a random letter prefix so the title tie-break is exercised;
// the numeric suffix keeps them unique.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<TaskDescriptor>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let per_task = (
            "[A-Za-z]{0,3}",
            due_strategy(),
            0..40u32,
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            proptest::bool::weighted(0.2),
        );
        proptest::collection::vec(per_task, num_tasks).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (prefix, due, hours, potential_deps, dangling))| {
                    let mut deps: Vec<String> = Vec::new();
                    if i > 0 {
                        for idx in potential_deps {
                            deps.push(format!("@{}", idx % i));
                        }
                    }
                    if dangling {
                        deps.push("missing-task".to_string());
                    }
                    TaskDescriptor {
                        title: format!("{prefix}{i}"),
                        estimated_hours: hours,
                        due_date: due,
                        dependencies: deps,
                    }
                })
                .collect::<Vec<_>>()
        })
    })
    .prop_map(resolve_index_refs)
}

// Dependencies are generated as "@<index>"; swap in the real titles.
fn resolve_index_refs(mut tasks: Vec<TaskDescriptor>) -> Vec<TaskDescriptor> {
    let titles: Vec<String> = tasks.iter().map(|t| t.title.clone()).collect();
    for task in tasks.iter_mut() {
        for dep in task.dependencies.iter_mut() {
            if let Some(idx) = dep.strip_prefix('@').and_then(|s| s.parse::<usize>().ok()) {
                *dep = titles[idx].clone();
            }
        }
    }
    tasks
}

// Straightforward quadratic version of the ordering contract: repeatedly take
// the smallest eligible task by (due date, title).
fn reference_order(tasks: &[TaskDescriptor]) -> Option<Vec<String>> {
    let present: HashSet<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    let mut done: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();

    loop {
        let next = tasks
            .iter()
            .filter(|t| !done.contains(t.title.as_str()))
            .filter(|t| {
                t.dependencies
                    .iter()
                    .all(|d| !present.contains(d.as_str()) || done.contains(d.as_str()))
            })
            .min_by(|a, b| compare_due(a.due(), b.due()).then_with(|| a.title.cmp(&b.title)));

        match next {
            Some(t) => {
                done.insert(t.title.as_str());
                order.push(t.title.clone());
            }
            None => break,
        }
    }

    (order.len() == tasks.len()).then_some(order)
}

proptest! {
    #[test]
    fn output_is_a_permutation_of_input(tasks in dag_strategy(12)) {
        let order = schedule(&tasks).unwrap().into_titles();

        let mut expected: Vec<String> = tasks.iter().map(|t| t.title.clone()).collect();
        let mut got = order.clone();
        expected.sort();
        got.sort();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn every_present_dependency_comes_first(tasks in dag_strategy(12)) {
        let order = schedule(&tasks).unwrap().into_titles();
        let pos: HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, t)| (t.as_str(), i)).collect();

        for task in &tasks {
            for dep in &task.dependencies {
                if let Some(&dep_pos) = pos.get(dep.as_str()) {
                    prop_assert!(
                        dep_pos < pos[task.title.as_str()],
                        "{} must precede {}", dep, task.title
                    );
                }
            }
        }
    }

    #[test]
    fn matches_reference_ordering(tasks in dag_strategy(12)) {
        let order = schedule(&tasks).unwrap().into_titles();
        prop_assert_eq!(Some(order), reference_order(&tasks));
    }

    #[test]
    fn input_order_does_not_matter(
        (tasks, shuffled) in dag_strategy(12)
            .prop_flat_map(|t| (Just(t.clone()), Just(t).prop_shuffle()))
    ) {
        let a = schedule(&tasks).unwrap();
        let b = schedule(&shuffled).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn later_duplicates_are_ignored(
        tasks in dag_strategy(10),
        pick in any::<usize>(),
        due in due_strategy(),
    ) {
        let baseline = schedule(&tasks).unwrap().into_titles();

        // A late duplicate that would, if honoured, create a cycle with every
        // other task and jump to the front of the queue.
        let victim = tasks[pick % tasks.len()].title.clone();
        let mut with_dup = tasks.clone();
        with_dup.push(TaskDescriptor {
            title: victim,
            estimated_hours: 99,
            due_date: due,
            dependencies: tasks.iter().map(|t| t.title.clone()).collect(),
        });

        prop_assert_eq!(schedule(&with_dup).unwrap().into_titles(), baseline);
    }

    #[test]
    fn closing_a_chain_into_a_ring_is_detected(
        tasks in dag_strategy(8),
        ring_len in 1..5usize,
    ) {
        // ring0 <- ring1 <- ... <- ringN <- ring0
        let mut all = tasks.clone();
        let ring: Vec<String> = (0..ring_len).map(|i| format!("ring{i}")).collect();
        for i in 0..ring_len {
            let mut deps = vec![ring[(i + 1) % ring_len].clone()];
            deps.push(tasks[0].title.clone());
            all.push(TaskDescriptor {
                title: ring[i].clone(),
                estimated_hours: 1,
                due_date: None,
                dependencies: deps,
            });
        }

        let err = schedule(&all).unwrap_err();
        let mut expected = ring.clone();
        expected.sort();
        prop_assert_eq!(&err.unresolved, &expected);
        prop_assert_eq!(err.cycles, vec![expected]);
    }
}
