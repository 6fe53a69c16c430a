/// Every combination taking one row from each input, concatenated into a
/// flat row. A scalar choice is a one-element row.
///
/// No inputs give no rows. A single input is returned as is, without being
/// combined with anything.
pub fn cartesian_product<T, R>(inputs: &[&[R]]) -> Vec<Vec<T>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    match inputs {
        [] => vec![],
        [only] => only.iter().map(|row| row.as_ref().to_vec()).collect(),
        [first, rest @ ..] => {
            let seed: Vec<Vec<T>> = first.iter().map(|row| row.as_ref().to_vec()).collect();
            rest.iter().fold(seed, |acc, choices| {
                acc.iter()
                    .flat_map(|prefix| {
                        choices.iter().map(move |choice| {
                            let choice = choice.as_ref();
                            let mut row = Vec::with_capacity(prefix.len() + choice.len());
                            row.extend_from_slice(prefix);
                            row.extend_from_slice(choice);
                            row
                        })
                    })
                    .collect()
            })
        }
    }
}
