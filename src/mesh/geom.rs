use nalgebra as na;

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
	pub points: [na::Point3<f32>; 3],
	pub normal: na::Vector3<f32>,
	pub uvs: [na::Point2<f32>; 3],
}

impl Triangle {
	pub fn new(p0: na::Point3<f32>, p1: na::Point3<f32>, p2: na::Point3<f32>) -> Self {
		Self::from_points([p0, p1, p2])
	}

	pub fn uv(mut self, p0: na::Point2<f32>, p1: na::Point2<f32>, p2: na::Point2<f32>) -> Self {
		self.uvs = [p0, p1, p2];
		self
	}

	/// Normal follows counter-clockwise winding
	pub fn from_points(points: [na::Point3<f32>; 3]) -> Self {
		let a = points[1] - points[0];
		let b = points[2] - points[0];
		let normal = a.cross(&b).normalize();
		Self {
			points,
			normal,
			uvs: [na::Point2::origin(); 3],
		}
	}

	pub fn centroid(&self) -> na::Point3<f32> {
		na::Point3::from((self.points[0].coords + self.points[1].coords + self.points[2].coords) / 3.0)
	}

	pub fn transform(&self, trans: &na::Matrix4<f32>) -> Self {
		let points = [
			trans.transform_point(&self.points[0]),
			trans.transform_point(&self.points[1]),
			trans.transform_point(&self.points[2]),
		];
		Self::from_points(points).uv(self.uvs[0], self.uvs[1], self.uvs[2])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counter_clockwise_faces_forward() {
		let tri = Triangle::new(
			na::Point3::new(0.0, 0.0, 0.0),
			na::Point3::new(1.0, 0.0, 0.0),
			na::Point3::new(0.0, 1.0, 0.0),
		);
		assert!((tri.normal - na::Vector3::z()).norm() < 1e-6);
	}

	#[test]
	fn transform_keeps_uvs_and_moves_points() {
		let tri = Triangle::new(
			na::Point3::new(0.0, 0.0, 0.0),
			na::Point3::new(1.0, 0.0, 0.0),
			na::Point3::new(0.0, 1.0, 0.0),
		)
		.uv(na::Point2::new(0.0, 0.0), na::Point2::new(1.0, 0.0), na::Point2::new(0.0, 1.0));

		let moved = tri.transform(&na::Matrix4::new_translation(&na::Vector3::new(0.0, 0.0, -2.0)));
		assert_eq!(moved.points[1], na::Point3::new(1.0, 0.0, -2.0));
		assert_eq!(moved.uvs, tri.uvs);
		assert_eq!(moved.normal, tri.normal);
	}
}
