use defarg::{default_arg, CommandParser, Parameter, Store, StoreConst};

fn main() {
    let namespace = CommandParser::new("dual_default")
        .add(Parameter::option(StoreConst::new("true"), "verbose", Some('v')).default("false"))
        .add(Parameter::option(default_arg("debug"), "level", Some('l')).default("info"))
        .add(Parameter::option(Store, "output", Some('o')))
        .build()
        .expect("The parser configuration must be valid.")
        .parse();

    println!("{namespace}");
}
