use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("clubhouse")
        .about("Total completed Clubhouse story points per team and append them to a spreadsheet")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .allow_external_subcommands(true)
        .subcommand(
            Command::new("stories")
                .about("Get story point totals for a number of days")
                .arg(
                    Arg::new("days")
                        .value_name("DAYS")
                        .help("Number of days before the end date to include")
                        .required(true)
                        .value_parser(value_parser!(u32))
                        .index(1)
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .short('e')
                        .value_name("DATE")
                        .help("Last day of the range: YYYY-MM-DD or an offset like 3d, 2w (default: today)")
                )
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .value_name("NUMBER")
                        .help("Stories requested per search page")
                        .value_parser(value_parser!(u32))
                )
                .arg(
                    Arg::new("max-pages")
                        .long("max-pages")
                        .value_name("NUMBER")
                        .help("Stop with an error after this many search pages")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("spreadsheet")
                        .long("spreadsheet")
                        .value_name("ID")
                        .help("Spreadsheet to append rows to")
                )
                .arg(
                    Arg::new("headcount")
                        .long("headcount")
                        .value_name("TEAM=N")
                        .help("Team member count to write without prompting")
                        .action(ArgAction::Append)
                )
                .arg(
                    Arg::new("no-prompt")
                        .long("no-prompt")
                        .help("Never ask for headcounts; unknown ones are left empty")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Print the totals without writing to the spreadsheet")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("List story IDs per team")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: table, json")
                        .value_parser(["table", "json"])
                        .default_value("table")
                )
        )
        .subcommand(
            Command::new("teams")
                .about("List teams and the projects they own")
        )
        .subcommand(
            Command::new("auth")
                .about("Store the Clubhouse API token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Save your Clubhouse API token")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the stored API token")
                        .action(ArgAction::SetTrue)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stories_args() {
        let matches = build_cli()
            .try_get_matches_from([
                "clubhouse", "stories", "7", "--end", "2018-12-16",
                "--headcount", "Web=4", "--headcount", "Ops=2", "--dry-run",
            ])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "stories");
        assert_eq!(sub.get_one::<u32>("days"), Some(&7));
        assert_eq!(sub.get_one::<String>("end").map(|s| s.as_str()), Some("2018-12-16"));
        assert_eq!(sub.get_many::<String>("headcount").unwrap().count(), 2);
        assert!(sub.get_flag("dry-run"));
        assert!(!sub.get_flag("no-prompt"));
        assert_eq!(sub.get_one::<String>("format").map(|s| s.as_str()), Some("table"));
    }

    #[test]
    fn test_days_must_be_a_number() {
        assert!(build_cli().try_get_matches_from(["clubhouse", "stories", "week"]).is_err());
        assert!(build_cli().try_get_matches_from(["clubhouse", "stories"]).is_err());
    }

    #[test]
    fn test_unknown_command_is_passed_through() {
        let matches = build_cli().try_get_matches_from(["clubhouse", "frobnicate"]).unwrap();
        assert_eq!(matches.subcommand_name(), Some("frobnicate"));
    }

    #[test]
    fn test_cli_is_consistent() {
        build_cli().debug_assert();
    }
}
