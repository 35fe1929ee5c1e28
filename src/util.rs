use std::cmp::Ordering;

#[derive(PartialEq)]
pub struct OrdWrapper<'a, T: PartialOrd>(pub &'a T);

impl<'a, T: PartialOrd> Eq for OrdWrapper<'a, T> {}

impl<'a, T: PartialOrd> PartialOrd for OrdWrapper<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T: PartialOrd> Ord for OrdWrapper<'a, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(other.0).unwrap_or(Ordering::Equal)
    }
}

/// Indices of all maximal elements in ascending order.
pub fn argmax_all<T: PartialOrd>(values: &[T]) -> Vec<usize> {
    let Some(max) = values.iter().max_by(|a, b| OrdWrapper(*a).cmp(&OrdWrapper(*b))) else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .filter(|&(_, v)| v == max)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn argmax() {
        assert_eq!(argmax_all::<f64>(&[]), Vec::<usize>::new());
        assert_eq!(argmax_all(&[1.0, 3.0, 2.0]), vec![1]);
        assert_eq!(argmax_all(&[3.0, 1.0, 3.0, 3.0]), vec![0, 2, 3]);
    }
}
