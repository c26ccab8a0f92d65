use core::ops::Range;

/// Byte range of one token inside the line it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A completed line split on spaces into a command name and at most `A`
/// arguments.
///
/// Only single spaces delimit, so `"a  b"` carries an empty argument
/// between the two spaces. Once `A` arguments have been started, the rest of
/// the line (spaces included) belongs to the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens<const A: usize> {
    name: Span,
    args: [Span; A],
    count: usize,
}

impl<const A: usize> Default for Tokens<A> {
    fn default() -> Self {
        Self {
            name: Span::default(),
            args: [Span::default(); A],
            count: 0,
        }
    }
}

impl<const A: usize> Tokens<A> {
    pub fn parse(line: &[u8]) -> Self {
        let mut tokens = Self {
            name: Span {
                start: 0,
                end: line.len(),
            },
            ..Self::default()
        };

        let mut pos = 0;
        while tokens.count < A {
            let Some(offset) = line[pos..].iter().position(|&b| b == b' ') else {
                break;
            };
            let delim = pos + offset;
            match tokens.count {
                0 => tokens.name.end = delim,
                n => tokens.args[n - 1].end = delim,
            }
            tokens.args[tokens.count] = Span {
                start: delim + 1,
                end: line.len(),
            };
            tokens.count += 1;
            pos = delim + 1;
        }

        tokens
    }

    pub fn name(&self) -> Span {
        self.name
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, index: usize) -> Option<Span> {
        self.args[..self.count].get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg<'a, const A: usize>(line: &'a [u8], tokens: &Tokens<A>, index: usize) -> Option<&'a [u8]> {
        tokens.get(index).map(|span| &line[span.range()])
    }

    #[test]
    fn test_name_only() {
        let line = b"help";
        let tokens = Tokens::<4>::parse(line);
        assert_eq!(&line[tokens.name().range()], b"help");
        assert!(tokens.is_empty());
        assert_eq!(tokens.get(0), None);
    }

    #[test]
    fn test_three_args() {
        let line = b"echo a b c";
        let tokens = Tokens::<4>::parse(line);
        assert_eq!(&line[tokens.name().range()], b"echo");
        assert_eq!(tokens.len(), 3);
        assert_eq!(arg(line, &tokens, 0), Some(&b"a"[..]));
        assert_eq!(arg(line, &tokens, 1), Some(&b"b"[..]));
        assert_eq!(arg(line, &tokens, 2), Some(&b"c"[..]));
        assert_eq!(arg(line, &tokens, 3), None);
    }

    #[test]
    fn test_overflow_folds_into_last_arg() {
        let line = b"echo 1 2 3 4 5";
        let tokens = Tokens::<4>::parse(line);
        assert_eq!(tokens.len(), 4);
        assert_eq!(arg(line, &tokens, 2), Some(&b"3"[..]));
        assert_eq!(arg(line, &tokens, 3), Some(&b"4 5"[..]));
    }

    #[test]
    fn test_consecutive_spaces_give_empty_args() {
        let line = b"echo  x";
        let tokens = Tokens::<4>::parse(line);
        assert_eq!(tokens.len(), 2);
        assert_eq!(arg(line, &tokens, 0), Some(&b""[..]));
        assert_eq!(arg(line, &tokens, 1), Some(&b"x"[..]));
    }

    #[test]
    fn test_trailing_space_gives_empty_last_arg() {
        let line = b"ls ";
        let tokens = Tokens::<4>::parse(line);
        assert_eq!(&line[tokens.name().range()], b"ls");
        assert_eq!(tokens.len(), 1);
        assert!(tokens.get(0).is_some_and(|span| span.is_empty()));
    }

    #[test]
    fn test_zero_arg_capacity_keeps_whole_line_as_name() {
        let line = b"echo a";
        let tokens = Tokens::<0>::parse(line);
        assert_eq!(tokens.name().len(), line.len());
        assert!(tokens.is_empty());
    }
}
