use acs_parser::CommandParser;

pub fn run(mut parser: CommandParser, words: &[String], json: bool) -> Result<(), String> {
    let input = words.join(" ");
    let intent = parser.parse(&input);
    super::print_intent(&intent, json)
}
