use hashbrown::{HashMap, HashSet};
use nfa2dfa::epsilon_closure;
use nfa2dfa::fa::epsilon_nfa::ENFA;
use nfa2dfa::fa::state::{State, StateSet};
use nfa2dfa::input_symbol::{epsilon, InputSymbol, Label};

#[test]
fn test_empty_enfa() {
    let enfa = ENFA::empty();

    assert!(enfa.states.is_empty(), "Empty ENFA should have no states");
    assert!(enfa.alphabet.is_empty(), "Empty ENFA should have no symbol");
    assert!(
        enfa.get_start_states().is_empty(),
        "Empty ENFA should have no start state"
    );
}

#[test]
fn test_add_states_and_transitions() {
    let mut enfa = ENFA::empty();

    let state1 = State::new("q1");
    let state2 = State::new("q2");
    let symbol_a = InputSymbol::new("a");

    enfa.add_start_state(state1.clone());
    assert_eq!(enfa.states.len(), 1, "ENFA should have one state after adding start state");

    enfa.add_accept_state(state2.clone());
    assert_eq!(enfa.states.len(), 2, "ENFA should have two states after adding accept state");

    enfa.add_transition(&state1, &symbol_a, &state2);
    assert_eq!(enfa.states.len(), 2, "Transitions between known states add no state");
    assert_eq!(
        enfa.get_alphabet(),
        HashSet::from([symbol_a.clone()]),
        "A transition on a new symbol extends the alphabet"
    );
    assert_eq!(
        enfa.targets(&state1, &Label::Symbol(symbol_a.clone())),
        StateSet::from_iter(vec![state2.clone()]),
        "Transition set should contain the target state"
    );
    assert!(enfa.is_accept_state(&state2));
    assert!(!enfa.is_accept_state(&state1));
}

#[test]
fn test_epsilon_closure_single_state() {
    let mut enfa = ENFA::empty();

    let state1 = State::new("q1");
    let state2 = State::new("q2");

    enfa.add_start_state(state1.clone());
    enfa.add_labeled_transition(&state1, &epsilon(), &state2);

    let closure = enfa.epsilon_closure(&StateSet::from_iter(vec![state1.clone()]));
    assert!(
        closure.contains(&state1),
        "Epsilon closure must include the original state"
    );
    assert!(
        closure.contains(&state2),
        "Epsilon closure must include reachable states via epsilon"
    );
    assert_eq!(closure.len(), 2, "Epsilon closure should include two states");
}

#[test]
fn test_epsilon_closure_chain_and_cycle() {
    let mut enfa = ENFA::empty();

    let q1 = State::new("q1");
    let q2 = State::new("q2");
    let q3 = State::new("q3");
    let q4 = State::new("q4");

    enfa.add_epsilon_transition(&q1, &q2);
    enfa.add_epsilon_transition(&q2, &q3);
    enfa.add_epsilon_transition(&q3, &q1);
    enfa.add_transition(&q3, &InputSymbol::new("a"), &q4);

    let closure = epsilon_closure(&enfa, &[q2.clone()]);
    assert_eq!(
        closure,
        StateSet::from_names(["q1", "q2", "q3"]),
        "Epsilon closure follows chains and terminates on cycles"
    );
    assert!(
        !closure.contains(&q4),
        "Symbol transitions are not part of the epsilon closure"
    );
}

#[test]
fn test_epsilon_closure_of_empty_set() {
    let mut enfa = ENFA::empty();
    enfa.add_epsilon_transition(&State::new("a"), &State::new("b"));

    let closure = epsilon_closure(&enfa, &StateSet::new());
    assert!(closure.is_empty(), "Closure of nothing is nothing");
}

#[test]
fn test_epsilon_closure_keeps_unknown_states() {
    let mut enfa = ENFA::empty();
    enfa.add_epsilon_transition(&State::new("a"), &State::new("b"));

    let closure = epsilon_closure(&enfa, &StateSet::from_names(["a", "ghost"]));
    assert_eq!(closure, StateSet::from_names(["a", "b", "ghost"]));
}

#[test]
fn test_new_drops_transitions_outside_alphabet() {
    let s = State::new("s");
    let t = State::new("t");
    let transition_function = HashMap::from([
        ((s.clone(), Label::symbol("a")), HashSet::from([t.clone()])),
        ((s.clone(), Label::symbol("b")), HashSet::from([s.clone()])),
        ((t.clone(), Label::Epsilon), HashSet::from([s.clone()])),
    ]);

    let enfa = ENFA::new(
        vec![s.clone(), t.clone()],
        vec![InputSymbol::new("a")],
        transition_function,
        vec![s.clone()],
        vec![t.clone()],
    );

    assert_eq!(enfa.alphabet, vec![InputSymbol::new("a")]);
    assert!(
        enfa.targets(&s, &Label::symbol("b")).is_empty(),
        "Transitions on undeclared symbols are ignored"
    );
    assert_eq!(enfa.targets(&s, &Label::symbol("a")), StateSet::from_names(["t"]));
    assert_eq!(enfa.targets(&t, &Label::Epsilon), StateSet::from_names(["s"]));
    assert_eq!(
        enfa.get_transitions(),
        vec![
            (s.clone(), Label::symbol("a"), t.clone()),
            (t.clone(), Label::Epsilon, s.clone()),
        ]
    );
}

#[test]
fn test_new_adds_undeclared_states() {
    let transition_function = HashMap::from([(
        (State::new("s"), Label::symbol("a")),
        HashSet::from([State::new("elsewhere")]),
    )]);

    let enfa = ENFA::new(
        vec![State::new("s")],
        vec![InputSymbol::new("a")],
        transition_function,
        vec![State::new("s")],
        vec![State::new("q2")],
    );

    assert_eq!(
        enfa.get_states(),
        HashSet::from([State::new("s"), State::new("elsewhere"), State::new("q2")])
    );
    assert_eq!(enfa.get_accept_states(), HashSet::from([State::new("q2")]));
}
