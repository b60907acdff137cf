use crate::content_rewrite::{ContentRewriter, RewriteRule};
use crate::file_mapping::{MappingEntry, MappingTable};
use crate::package_name::PackageName;

/// The static data driving one package relocation: old and new package names,
/// the file mapping table for production sources, the test-class mapping, the
/// literal sub-package rename rules, and the entry-point type rename.
///
/// Defined before execution, immutable during a run.
pub struct RelocationPlan {
    pub old_package: PackageName,
    pub new_package: PackageName,
    pub mappings: MappingTable,
    pub test_mappings: MappingTable,
    pub literal_rules: Vec<RewriteRule>,
    pub type_renames: Vec<RewriteRule>,
}

impl RelocationPlan {
    /// The built-in plan: relocate `com.CarSelling.Sell.the.old.Car` to
    /// `com.carselling.oldcar`.
    pub fn oldcar() -> Self {
        let old_package: PackageName = "com.CarSelling.Sell.the.old.Car"
            .parse()
            .expect("builtin old package name is valid");
        let new_package: PackageName = "com.carselling.oldcar"
            .parse()
            .expect("builtin new package name is valid");

        let new = new_package.as_str();
        let literal_rules = vec![
            RewriteRule::new(format!("{new}.model"), format!("{new}.entity")),
            RewriteRule::new(format!("{new}.dto.UserDTO"), format!("{new}.dto.auth")),
            RewriteRule::new(format!("{new}.dto.CarDTO"), format!("{new}.dto.car")),
            RewriteRule::new(
                format!("{new}.security.AuthPayload"),
                format!("{new}.dto.auth.AuthPayload"),
            ),
            RewriteRule::new(
                format!("{new}.security.jwt.JwtAuthResponse"),
                format!("{new}.dto.auth.JwtAuthResponse"),
            ),
        ];

        let type_renames = vec![RewriteRule::new(
            "SellTheOldCarApplication",
            "OldCarApplication",
        )];

        Self {
            old_package,
            new_package,
            mappings: oldcar_mappings(),
            test_mappings: oldcar_test_mappings(),
            literal_rules,
            type_renames,
        }
    }

    /// Build the content rewriter for this plan.
    pub fn rewriter(&self) -> ContentRewriter {
        ContentRewriter::new(
            &self.old_package,
            &self.new_package,
            self.literal_rules.clone(),
            self.type_renames.clone(),
        )
    }
}

fn m(old_path: &str, new_path: &str) -> MappingEntry {
    MappingEntry::new(old_path, new_path)
}

/// The full relocation table for the old production tree. Old paths are
/// unique; the chat entities and repositories appear twice because historical
/// checkouts placed them at either location.
fn oldcar_mappings() -> MappingTable {
    MappingTable::new(vec![
        // Main application
        m("SellTheOldCarApplication.java", "OldCarApplication.java"),
        // Config
        m("config/CorsConfig.java", "config/CorsConfig.java"),
        m("config/ScheduledTasks.java", "config/ScheduledTasks.java"),
        m("config/WebSocketConfig.java", "config/WebSocketConfig.java"),
        m("config/WebSocketEventListener.java", "config/WebSocketEventListener.java"),
        // Controllers - auth
        m("controller/AuthController.java", "controller/auth/AuthController.java"),
        // Controllers - car
        m("controller/Car/CarController.java", "controller/car/CarController.java"),
        m("controller/Car/SecureCarController.java", "controller/car/SecureCarController.java"),
        m("controller/CarManagementController.java", "controller/car/CarManagementController.java"),
        // Controllers - user
        m("controller/User/UserController.java", "controller/user/UserController.java"),
        // Controllers - dealer
        m("controller/SellerController.java", "controller/dealer/SellerController.java"),
        // Controllers - chat
        m("controller/chat/ChatController.java", "controller/chat/ChatController.java"),
        m("controller/chat/ChatRestController.java", "controller/chat/ChatRestController.java"),
        m("controller/chat/ChatWebSocketController.java", "controller/chat/ChatWebSocketController.java"),
        // DTOs - auth
        m("security/AuthPayload.java", "dto/auth/AuthPayload.java"),
        m("security/jwt/JwtAuthResponse.java", "dto/auth/JwtAuthResponse.java"),
        m("dto/UserDTO/LoginRequest.java", "dto/auth/LoginRequest.java"),
        m("dto/UserDTO/LoginInput.java", "dto/auth/LoginInput.java"),
        m("dto/UserDTO/RegisterRequest.java", "dto/auth/RegisterRequest.java"),
        m("dto/UserDTO/ForgotPasswordRequest.java", "dto/auth/ForgotPasswordRequest.java"),
        m("dto/UserDTO/ResetPasswordRequest.java", "dto/auth/ResetPasswordRequest.java"),
        m("dto/UserDTO/RefreshTokenRequest.java", "dto/auth/RefreshTokenRequest.java"),
        // DTOs - user
        m("dto/UserDTO/UpdateUserInput.java", "dto/user/UpdateUserInput.java"),
        m("dto/UserPage.java", "dto/user/UserPage.java"),
        // DTOs - car
        m("dto/CarDTO/CarInput.java", "dto/car/CarInput.java"),
        m("dto/CarDTO/UpdateCarInput.java", "dto/car/UpdateCarInput.java"),
        m("dto/CarDTO/CarResponseDTO.java", "dto/car/CarResponseDTO.java"),
        // Entities (model -> entity)
        m("model/User.java", "entity/User.java"),
        m("model/Car.java", "entity/Car.java"),
        m("model/Role.java", "entity/Role.java"),
        m("model/Permission.java", "entity/Permission.java"),
        m("model/SellerType.java", "entity/SellerType.java"),
        m("model/OtpToken.java", "entity/OtpToken.java"),
        // Chat entities
        m("model/Chat.java", "entity/chat/Chat.java"),
        m("model/ChatParticipant.java", "entity/chat/ChatParticipant.java"),
        m("model/Message.java", "entity/chat/Message.java"),
        m("model/MessageStatus.java", "entity/chat/MessageStatus.java"),
        m("model/UserStatus.java", "entity/chat/UserStatus.java"),
        m("model/chat/Chat.java", "entity/chat/Chat.java"),
        m("model/chat/ChatParticipant.java", "entity/chat/ChatParticipant.java"),
        m("model/chat/Message.java", "entity/chat/Message.java"),
        m("model/chat/MessageStatus.java", "entity/chat/MessageStatus.java"),
        m("model/chat/UserStatus.java", "entity/chat/UserStatus.java"),
        // Exceptions
        m("exception/GlobalExceptionHandler.java", "exception/GlobalExceptionHandler.java"),
        m("exception/ResourceNotFoundException.java", "exception/ResourceNotFoundException.java"),
        m("exception/ResourceAlreadyExistsException.java", "exception/ResourceAlreadyExistsException.java"),
        m("exception/UnauthorizedActionException.java", "exception/UnauthorizedActionException.java"),
        // Repositories
        m("repository/UserRepository.java", "repository/UserRepository.java"),
        m("repository/CarRepository.java", "repository/CarRepository.java"),
        m("repository/OtpTokenRepository.java", "repository/OtpTokenRepository.java"),
        m("repository/ChatRepository.java", "repository/ChatRepository.java"),
        m("repository/ChatParticipantRepository.java", "repository/ChatParticipantRepository.java"),
        m("repository/MessageRepository.java", "repository/MessageRepository.java"),
        m("repository/MessageStatusRepository.java", "repository/MessageStatusRepository.java"),
        m("repository/UserStatusRepository.java", "repository/UserStatusRepository.java"),
        // Chat repositories
        m("repository/chat/ChatRepository.java", "repository/chat/ChatRepository.java"),
        m("repository/chat/ChatParticipantRepository.java", "repository/chat/ChatParticipantRepository.java"),
        m("repository/chat/MessageRepository.java", "repository/chat/MessageRepository.java"),
        m("repository/chat/MessageStatusRepository.java", "repository/chat/MessageStatusRepository.java"),
        m("repository/chat/UserStatusRepository.java", "repository/chat/UserStatusRepository.java"),
        // Security
        m("security/SecurityConfig.java", "security/SecurityConfig.java"),
        m("security/CustomUserDetailsService.java", "security/CustomUserDetailsService.java"),
        m("security/UserPrincipal.java", "security/UserPrincipal.java"),
        m("security/jwt/JwtAuthenticationEntryPoint.java", "security/jwt/JwtAuthenticationEntryPoint.java"),
        m("security/jwt/JwtAuthenticationFilter.java", "security/jwt/JwtAuthenticationFilter.java"),
        m("security/jwt/JwtTokenProvider.java", "security/jwt/JwtTokenProvider.java"),
        // Services
        m("service/AuthService.java", "service/AuthService.java"),
        m("service/AuthenticationService.java", "service/AuthenticationService.java"),
        m("service/UserService.java", "service/UserService.java"),
        m("service/CarService.java", "service/CarService.java"),
        m("service/OtpService.java", "service/OtpService.java"),
        // Service implementations
        m("service/CarServiceImpl.java", "service/impl/CarServiceImpl.java"),
        // Chat services
        m("service/chat/ChatService.java", "service/chat/ChatService.java"),
        m("service/chat/ChatSecurityService.java", "service/chat/ChatSecurityService.java"),
        m("service/chat/MessageService.java", "service/chat/MessageService.java"),
        m("service/chat/MessageDeliveryService.java", "service/chat/MessageDeliveryService.java"),
        m("service/chat/RateLimitingService.java", "service/chat/RateLimitingService.java"),
        m("service/chat/UserStatusService.java", "service/chat/UserStatusService.java"),
    ])
    .expect("builtin mapping table has unique old paths")
}

/// The single entry-point test class, migrated against the test roots.
fn oldcar_test_mappings() -> MappingTable {
    MappingTable::new(vec![m(
        "SellTheOldCarApplicationTests.java",
        "OldCarApplicationTests.java",
    )])
    .expect("builtin test mapping table has unique old paths")
}
