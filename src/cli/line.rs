/// Split an input line into arguments.
///
/// Whitespace separates arguments; single or double quotes group words, so
/// `add "Weekly groceries" 150` yields three arguments. A quote only opens a
/// group at the start of an argument, so `Bob's` stays a plain word.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if !in_arg && (c == '"' || c == '\'') => {
                quote = Some(c);
                in_arg = true;
            }
            None if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            None => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_line("add Salary 1000").unwrap(),
            vec!["add", "Salary", "1000"]
        );
        assert_eq!(split_line("   ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(
            split_line(r#"add "Weekly groceries" 150 --type debit"#).unwrap(),
            vec!["add", "Weekly groceries", "150", "--type", "debit"]
        );
        assert_eq!(
            split_line("add 'Rent for March' 500").unwrap(),
            vec!["add", "Rent for March", "500"]
        );
        assert_eq!(
            split_line(r#"add "Bob's gift" 20"#).unwrap(),
            vec!["add", "Bob's gift", "20"]
        );
    }

    #[test]
    fn test_split_apostrophe_inside_word() {
        assert_eq!(
            split_line("add Bob's 20").unwrap(),
            vec!["add", "Bob's", "20"]
        );
        assert_eq!(
            split_line(r#"add 5"-inch 3"#).unwrap(),
            vec!["add", "5\"-inch", "3"]
        );
    }

    #[test]
    fn test_split_empty_quotes_is_an_argument() {
        assert_eq!(split_line(r#"add "" 50"#).unwrap(), vec!["add", "", "50"]);
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert!(split_line(r#"add "oops 50"#).is_err());
    }
}
