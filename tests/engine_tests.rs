use routematch::{
    compile, compile_map, extract_path_variables, longest_prefixes, parse_query,
};

fn route_table() -> [&'static str; 6] {
    [
        r"^/commits/(\w+)(?:\.\.(\w+))?$",
        "/series/:title/episode/:num/actors",
        "/shop/:aile/bananas",
        "/shop/:aile/bananas",
        "/commits/:from..:to",
        "/flights/:airport/:depart-:arrive/:gate",
    ]
}

#[test]
fn registration_compiles_and_deduplicates_the_table() {
    let map = compile_map(route_table()).expect("registration failed");
    assert_eq!(map.len(), 5);
}

#[test]
fn registration_groups_routes_by_longest_prefix() {
    let prefixes = longest_prefixes(route_table());
    assert_eq!(prefixes.len(), 5);
    assert!(prefixes.contains("^/commits"));
    assert!(prefixes.contains("/shop/:aile/bananas"));
}

#[test]
fn dispatch_extracts_named_and_positional_params() {
    let map = compile_map(route_table()).expect("registration failed");

    let commits = &map[r"^/commits/(\w+)(?:\.\.(\w+))?$"];
    let binding = commits.extract("/commits/71dbb9c..4c084f9");
    assert_eq!(binding.get("0"), Some("71dbb9c"));
    assert_eq!(binding.get("1"), Some("4c084f9"));

    let flights = &map["/flights/:airport/:depart-:arrive/:gate"];
    let binding = flights.extract("/flights/ord/chicago-atlanta/D20");
    assert_eq!(binding.get("airport"), Some("ord"));
    assert_eq!(binding.get("depart"), Some("chicago"));
    assert_eq!(binding.get("arrive"), Some("atlanta"));
    assert_eq!(binding.get("gate"), Some("D20"));
}

#[test]
fn dispatch_treats_non_matching_routes_as_not_applicable() {
    let map = compile_map(route_table()).expect("registration failed");
    let flights = &map["/flights/:airport/:depart-:arrive/:gate"];
    assert!(flights.extract("/series/lost/episode/4/actors").is_empty());
}

#[test]
fn dispatch_parses_the_query_component() {
    let map = parse_query(Some("math=20&history=30&science=30&social=30&math=40"));
    assert_eq!(map.len(), 4);
    assert_eq!(map.get("math").map(<[String]>::len), Some(2));
    assert_eq!(map.first("social"), Some("30"));
}

#[test]
fn binding_never_exceeds_group_count() {
    let compiled = compile(r"^/commits/(\w+)(?:\.\.(\w+))?$").expect("compile failed");
    assert_eq!(compiled.regex().captures_len() - 1, 2);
    assert!(compiled.extract("/commits/71dbb9c").len() <= 2);
    assert!(compiled.extract("/nowhere").len() <= 2);
}

#[test]
fn plain_name_patterns_round_trip_their_values() {
    let cases = [
        ("/series/:title/episode/:num/actors", vec![("title", "lost"), ("num", "4")]),
        ("/shop/:aile/bananas", vec![("aile", "7")]),
        ("/flights/:airport/:depart-:arrive/:gate", vec![
            ("airport", "ord"),
            ("depart", "chicago"),
            ("arrive", "atlanta"),
            ("gate", "D20"),
        ]),
    ];
    for (pattern, values) in cases {
        let mut path = pattern.to_string();
        for (name, value) in &values {
            path = path.replace(&format!(":{name}"), value);
        }
        let binding = extract_path_variables(pattern, &path);
        assert_eq!(binding.len(), values.len(), "pattern {pattern}");
        for (name, value) in &values {
            assert_eq!(binding.get(name), Some(*value), "pattern {pattern}");
        }
    }
}
