//! Standalone textbook exercises. None of these interact with the ladder solver.

pub mod backtracking {
    fn keypad_letters(digit: char) -> Option<&'static str> {
        match digit {
            '2' => Some("abc"),
            '3' => Some("def"),
            '4' => Some("ghi"),
            '5' => Some("jkl"),
            '6' => Some("mno"),
            '7' => Some("pqrs"),
            '8' => Some("tuv"),
            '9' => Some("wxyz"),
            _ => None,
        }
    }

    /// All letter strings a phone keypad could produce for `digits`.
    ///
    /// Empty input or any character outside `2..=9` yields no combinations.
    pub fn letter_combinations(digits: &str) -> Vec<String> {
        let letters: Option<Vec<&str>> = digits.chars().map(keypad_letters).collect();
        let letters = match letters {
            Some(letters) if !letters.is_empty() => letters,
            _ => return Vec::new(),
        };

        let mut combinations = Vec::new();
        let mut current = String::with_capacity(letters.len());
        backtrack(&letters, &mut current, &mut combinations);
        combinations
    }

    fn backtrack(letters: &[&str], current: &mut String, combinations: &mut Vec<String>) {
        let Some((first, rest)) = letters.split_first() else {
            combinations.push(current.clone());
            return;
        };
        for letter in first.chars() {
            current.push(letter);
            backtrack(rest, current, combinations);
            current.pop(); // undo before trying the next letter
        }
    }
}

pub mod greedy {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ActivityError {
        #[error("{starts} start times but {finishes} finish times")]
        LengthMismatch { starts: usize, finishes: usize },
    }

    /// Picks a maximum set of non-overlapping activities, earliest finish first.
    ///
    /// Returns 1-based activity numbers in the order they were selected. An
    /// activity may start exactly when the previous one finishes.
    pub fn select_activities(start: &[i64], finish: &[i64]) -> Result<Vec<usize>, ActivityError> {
        if start.len() != finish.len() {
            return Err(ActivityError::LengthMismatch {
                starts: start.len(),
                finishes: finish.len(),
            });
        }

        let mut order: Vec<usize> = (0..start.len()).collect();
        order.sort_by_key(|&i| finish[i]); // stable, ties keep input order

        let mut selected = Vec::new();
        let mut last_finish = None;
        for i in order {
            if last_finish.map_or(true, |last| start[i] >= last) {
                selected.push(i + 1);
                last_finish = Some(finish[i]);
            }
        }
        Ok(selected)
    }
}

pub mod strings {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum VowelError {
        #[error("cannot reverse vowels of an empty string")]
        EmptyInput,
    }

    fn is_vowel(c: char) -> bool {
        matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// Reverses the order of the vowels in `word`, leaving every other character in place.
    pub fn reverse_vowels(word: &str) -> Result<String, VowelError> {
        if word.is_empty() {
            return Err(VowelError::EmptyInput);
        }

        let mut chars: Vec<char> = word.chars().collect();
        let (mut left, mut right) = (0, chars.len() - 1);
        while left < right {
            if !is_vowel(chars[left]) {
                left += 1;
            } else if !is_vowel(chars[right]) {
                right -= 1;
            } else {
                chars.swap(left, right);
                left += 1;
                right -= 1;
            }
        }
        Ok(chars.into_iter().collect())
    }
}
