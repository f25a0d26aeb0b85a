use crate::{StateGraphBuilder, StateId, SymbolSet};

#[test]
fn builder_starts_with_start_state() {
    let builder = StateGraphBuilder::new();
    assert_eq!(builder.len(), 1);
    assert_eq!(builder.start(), StateId::START);

    let graph = builder.finish();
    assert_eq!(graph.len(), 1);
    assert!(!graph.is_empty());
    assert!(!graph.state(graph.start()).is_accept());
    assert!(graph.state(graph.start()).transitions().is_empty());
}

#[test]
fn transitions_keep_insertion_order() {
    let mut builder = StateGraphBuilder::new();
    let start = builder.start();
    let a = builder.add_state();
    let b = builder.add_state();
    builder.connect(start, a, "xy".chars().collect());
    builder.connect(start, b, SymbolSet::single('y'));
    let graph = builder.finish();

    let targets: Vec<_> = graph
        .state(start)
        .transitions()
        .iter()
        .map(|t| t.target())
        .collect();
    assert_eq!(targets, vec![a, b]);

    // Overlapping symbol: first transition wins.
    assert_eq!(graph.state(start).next('y').map(|t| t.target()), Some(a));
    assert_eq!(graph.state(start).next('x').map(|t| t.target()), Some(a));
    assert!(graph.state(start).next('z').is_none());
}

#[test]
fn self_loops_are_plain_indices() {
    let mut builder = StateGraphBuilder::new();
    let start = builder.start();
    builder.connect(start, start, SymbolSet::single('a'));
    builder.mark_accept(start);
    let graph = builder.finish();

    let state = graph.state(start);
    assert!(state.is_accept());
    assert_eq!(state.next('a').map(|t| t.target()), Some(start));
}

#[test]
fn accept_states_and_counts() {
    let mut builder = StateGraphBuilder::new();
    let start = builder.start();
    let s1 = builder.add_state();
    let s2 = builder.add_state();
    builder.connect(start, s1, SymbolSet::single('a'));
    builder.connect(s1, s2, SymbolSet::single('b'));
    builder.connect(start, s2, SymbolSet::single('b'));
    builder.mark_accept(s2);
    builder.mark_accept(start);
    let graph = builder.finish();

    assert_eq!(graph.accept_states().collect::<Vec<_>>(), vec![start, s2]);
    assert_eq!(graph.transition_count(), 3);
    assert!(graph.get(StateId::START).is_some());
}

#[test]
fn state_id_display() {
    assert_eq!(StateId::START.to_string(), "S0");
    assert_eq!(format!("{:?}", StateId::START), "S0");
}

#[test]
#[should_panic(expected = "was never allocated")]
fn connect_to_unallocated_state_panics() {
    let mut other = StateGraphBuilder::new();
    let foreign = other.add_state();

    let mut builder = StateGraphBuilder::new();
    let start = builder.start();
    builder.connect(start, foreign, SymbolSet::single('a'));
}

#[test]
fn graph_serializes_to_json() {
    let mut builder = StateGraphBuilder::new();
    let start = builder.start();
    let s1 = builder.add_state();
    builder.connect(start, s1, "ab".chars().collect());
    builder.mark_accept(s1);
    let graph = builder.finish();

    let json = serde_json::to_string(&graph).unwrap();
    assert_eq!(
        json,
        r#"{"states":[{"transitions":[{"target":1,"symbols":"ab"}],"accept":false},{"transitions":[],"accept":true}]}"#
    );
}
