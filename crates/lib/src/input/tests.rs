use super::{ErrorKind, IStr, Sep, Skip, Split, W};

#[test]
fn test_words_and_integers() {
    let mut input = IStr::new("Valve AA has flow rate=13");
    let [W(valve), W(name)] = input.next::<[W<&str>; 2]>().unwrap();
    assert_eq!(valve, "Valve");
    assert_eq!(name, "AA");

    let Split((_, rate)) = input.next::<Split<'=', (Skip, u32)>>().unwrap();
    assert_eq!(rate, 13);
    assert!(input.is_empty());
}

#[test]
fn test_not_integer() {
    let mut input = IStr::new("rate=-3");
    let error = input.next::<Split<'=', (Skip, u32)>>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::NotInteger("-3".into()));
    assert_eq!(error.span(), 5..7);
}

#[test]
fn test_lines_keep_absolute_index() {
    let mut input = IStr::new("first line\nsecond\n\nthird");

    let first = input.next_line().unwrap();
    assert_eq!(first.as_data(), b"first line");
    assert_eq!(first.index(), 0);

    let second = input.next_line().unwrap();
    assert_eq!(second.as_data(), b"second");
    assert_eq!(second.index(), 11);

    let blank = input.next_line().unwrap();
    assert!(blank.is_blank());

    let third = input.next_line().unwrap();
    assert_eq!(third.index(), 19);
    assert!(input.next_line().is_none());
}

#[test]
fn test_split_tuple() {
    let mut input = IStr::new("a b; c d");
    let Split((left, right)) = input.next::<Split<';', (IStr, IStr)>>().unwrap();
    assert_eq!(left.as_data(), b"a b");
    assert_eq!(right.as_data(), b" c d");
    assert_eq!(right.index(), 4);

    let mut input = IStr::new("no separator");
    let error = input.next::<Split<';', (IStr, IStr)>>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ExpectedSplit(';'));
}

#[test]
fn test_sep() {
    let mut input = IStr::new(" DD, II,BB ");
    let Sep(names) = input.next::<Sep<',', W<&str>>>().unwrap();
    let names = names.into_iter().map(|W(n)| n).collect::<Vec<_>>();
    assert_eq!(names, ["DD", "II", "BB"]);

    let mut input = IStr::new("   ");
    let Sep(names) = input.next::<Sep<',', W<&str>>>().unwrap();
    assert!(names.is_empty());

    let mut input = IStr::new("DD, , BB");
    let error = input.next::<Sep<',', W<&str>>>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ExpectedElement);

    let mut input = IStr::new("DD EE, BB");
    let error = input.next::<Sep<',', W<&str>>>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::TrailingInput("EE".into()));
}

#[test]
fn test_skip_past() {
    let mut input = IStr::new(" tunnels lead to valves DD");
    input.skip_past("to").unwrap();
    assert!(input.eat_any(&["valve", "valves"]).unwrap());
    assert!(!input.eat_any(&["valve", "valves"]).unwrap());
    assert_eq!(input.next::<W<&str>>().unwrap().0, "DD");

    let mut input = IStr::new("nothing here");
    let error = input.skip_past("to").unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ExpectedWord("to"));
}

#[test]
fn test_short_array() {
    let mut input = IStr::new("Valve");
    let error = input.next::<[W<&str>; 2]>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::BadArray(2, 1));
}
