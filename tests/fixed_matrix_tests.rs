//! End-to-end use of the public API: build, access, combine and render
//! fixed matrices, seeding some of them from random generators.

use crescent::random::distribution::{DiscreteTriangular, UniformRange};
use crescent::random::generator::{RandomNumberGenerator, UniformProbabilityGenerator};
use crescent::{make_identity, to_fixed_matrix, FixedMatrix, Matrix, MatrixError, MatrixFormat};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Generic code only sees the shape-agnostic trait.
fn diagonal_sum_or_zero<M: Matrix<i64>>(m: &M) -> i64 {
    m.trace().unwrap_or(0)
}

#[test]
fn test_matrix_product_example() {
    let a = FixedMatrix::<i32, 2, 2>::from_list(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = FixedMatrix::<i32, 2, 2>::from_list(vec![vec![5, 6], vec![7, 8]]).unwrap();
    let product = &a * &b;

    assert_eq!(product.to_list(), vec![vec![19, 22], vec![43, 50]]);
    assert_eq!(product.trace(), Ok(69));
}

#[test]
fn test_shape_changing_chain() {
    let m: FixedMatrix<i64, 4, 4> = FixedMatrix::from_fn(|r, c| (r * 4 + c) as i64);

    let minor: FixedMatrix<i64, 3, 3> = m.submatrix(0, 3);
    assert_eq!(
        minor,
        FixedMatrix::from([[4, 5, 6], [8, 9, 10], [12, 13, 14]])
    );

    let smaller: FixedMatrix<i64, 2, 2> = minor.submatrix(1, 1);
    assert_eq!(smaller, FixedMatrix::from([[4, 6], [12, 14]]));

    // (2x4) * (4x2) -> (2x2)
    let top: FixedMatrix<i64, 2, 4> = to_fixed_matrix(&m.to_list()[..2]);
    let product = &top * &top.transpose();
    assert_eq!(product, FixedMatrix::from([[14, 38], [38, 126]]));

    assert_eq!(diagonal_sum_or_zero(&product), 140);
    assert_eq!(diagonal_sum_or_zero(&top), 0);
}

#[test]
fn test_identity_trace() {
    assert_eq!(make_identity::<i32, 1>().trace(), Ok(1));
    assert_eq!(make_identity::<u64, 7>().trace(), Ok(7));
    assert_eq!(make_identity::<f32, 5>().trace(), Ok(5.0));
}

#[test]
fn test_error_kinds() {
    let m = FixedMatrix::<u8, 2, 3>::filled(1);

    assert!(matches!(m.at(2, 0), Err(MatrixError::OutOfRange { .. })));
    assert!(matches!(m.trace(), Err(MatrixError::LogicError(_))));
    assert!(matches!(
        FixedMatrix::<u8, 2, 3>::from_list(vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]]),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn test_random_seeded_matrices() {
    let mut gen = RandomNumberGenerator::new(
        StdRng::seed_from_u64(2024),
        UniformRange::new(-10i64, 10).unwrap(),
    );
    let a = FixedMatrix::<i64, 3, 3>::from_generator(&mut gen);
    let b = FixedMatrix::<i64, 3, 3>::from_generator(&mut gen);

    assert!(a.iter().chain(b.iter()).all(|x| (-10..=10).contains(x)));
    assert_eq!(&(&a + &b) - &b, a);
    assert_eq!(&a * &make_identity::<i64, 3>(), a);

    let mut probs = UniformProbabilityGenerator::probability(StdRng::seed_from_u64(1));
    let p = FixedMatrix::<f64, 2, 5>::from_generator(&mut probs);
    assert!(p.iter().all(|x| (0.0..1.0).contains(x)));

    let mut tri = RandomNumberGenerator::new(
        StdRng::seed_from_u64(8),
        DiscreteTriangular::new(4, true).unwrap(),
    );
    let t = FixedMatrix::<usize, 4, 4>::from_generator(&mut tri);
    assert!(t.iter().all(|x| (1..4).contains(x)));
}

#[test]
fn test_generic_algorithms() {
    let mut m = FixedMatrix::from([[3, 1, 2], [9, 7, 8]]);

    m.as_mut_slice().sort_unstable();
    assert_eq!(m, FixedMatrix::from([[1, 2, 3], [7, 8, 9]]));
    assert_eq!(m.as_slice().binary_search(&8), Ok(4));

    m.iter_mut().for_each(|x| *x *= 10);
    assert_eq!(m.iter().rev().next(), Some(&90));
    assert_eq!(m.iter().max(), Some(&90));
    assert_eq!(m.iter().sum::<i32>(), 300);
}

#[test]
fn test_render() {
    let m = FixedMatrix::from([[1, 0], [0, 1]]);
    assert_eq!(format!("{}", m), "1 0 \n0 1 \n");

    let mut out = String::new();
    m.write(&mut out, &MatrixFormat::new('|')).unwrap();
    assert_eq!(out, "1|0|\n0|1|\n");
}
