pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Self;
    fn to_list(&self) -> Vec<Vec<T>>;
    fn at(&self, row: usize, col: usize) -> T;
}
