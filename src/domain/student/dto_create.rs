#[derive(Debug, Clone)]
pub struct CreateStudentDto {
    pub name: String,
    pub email_address: String,
}
