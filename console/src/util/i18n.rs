//! Console message tables (Spanish and English).
//!
//! SYSTEM CONTEXT
//! ==============
//! Views resolve every user-facing string through `t(locale, key)` with the
//! current `Locale` from context. Keys are dotted paths (`auth.signIn`,
//! `console.manage.users.title`); navigation labels are derived from the
//! navigation table, and every `AuthError` has a key of its own.
//!
//! An unknown key renders as itself so a missing entry is visible on screen
//! rather than blank.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::util::persistence;

/// `localStorage` key holding the selected language code.
pub const STORAGE_KEY: &str = "i18nextLng";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Es];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parse a language code; region suffixes (`en-US`) are ignored.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Key of this language's own name (`console.language.es`).
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Es => "console.language.es",
            Self::En => "console.language.en",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Es => ES,
            Self::En => EN,
        }
    }
}

/// Translate `key`, falling back to the key itself.
#[must_use]
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    locale
        .table()
        .iter()
        .find_map(|(k, v)| (*k == key).then_some(*v))
        .unwrap_or(key)
}

/// Stored language, or Spanish when nothing valid is stored.
#[must_use]
pub fn read_preference() -> Locale {
    persistence::load_string(STORAGE_KEY)
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or_default()
}

pub fn save_preference(locale: Locale) {
    persistence::save_string(STORAGE_KEY, locale.code());
}

const ES: &[(&str, &str)] = &[
    // auth
    ("auth.signIn", "Iniciar sesión"),
    ("auth.login", "Entrar"),
    ("auth.register", "Crear cuenta de administrador"),
    ("auth.registerAction", "Registrarse"),
    ("auth.email", "Correo electrónico"),
    ("auth.emailPlaceholder", "tu@correo.com"),
    ("auth.password", "Contraseña"),
    ("auth.passwordPlaceholder", "••••••••"),
    ("auth.noAccount", "¿No tienes cuenta? Regístrate"),
    ("auth.haveAccount", "¿Ya tienes cuenta? Inicia sesión"),
    ("auth.recoverPassword", "¿Olvidaste tu contraseña?"),
    ("auth.recoverInstructions", "Introduce tu correo y te enviaremos un enlace para restablecer la contraseña."),
    ("auth.sendResetLink", "Enviar enlace"),
    ("auth.resetEmailSent", "Te hemos enviado un correo con instrucciones para restablecer tu contraseña."),
    ("auth.backToLogin", "Volver a iniciar sesión"),
    ("auth.emailRequired", "Introduce un correo electrónico válido."),
    ("auth.passwordRequired", "Introduce tu contraseña."),
    ("auth.invalidCredentials", "Correo o contraseña incorrectos."),
    ("auth.emailInUse", "Ya existe una cuenta con este correo."),
    ("auth.weakPassword", "La contraseña debe tener al menos 6 caracteres."),
    ("auth.notAuthorized", "Esta cuenta no tiene acceso a la consola de administración."),
    ("auth.unknownEmail", "No existe ninguna cuenta con este correo."),
    ("auth.providerFailure", "No se pudo contactar con el servicio de autenticación. Inténtalo de nuevo."),
    ("auth.providerUnavailable", "El servicio de autenticación no responde. Recarga la página para reintentar."),
    // common
    ("common.loading", "Cargando..."),
    ("common.save", "Guardar"),
    ("common.saving", "Guardando..."),
    ("common.close", "Cerrar"),
    // console shell
    ("console.home.title", "Consola de administración"),
    ("console.home.subtitle", "Selecciona una sección del menú para empezar."),
    ("console.section.empty", "Esta sección todavía no tiene contenido."),
    ("console.notFound", "Sección no encontrada"),
    ("console.toggleSidebar", "Mostrar u ocultar el menú"),
    ("console.profile", "Perfil"),
    ("console.signOut", "Cerrar sesión"),
    ("console.signedInAs", "Sesión iniciada como"),
    ("console.user", "Usuario"),
    ("console.language.es", "Español"),
    ("console.language.en", "English"),
    // navigation
    ("console.manage.title", "Gestionar"),
    ("console.manage.users.title", "Usuarios"),
    ("console.manage.listings.title", "Anuncios"),
    ("console.manage.transactions.title", "Transacciones"),
    ("console.manage.reviews.title", "Reseñas"),
    ("console.configuration.title", "Configuración"),
    ("console.configuration.general.title", "General"),
    ("console.configuration.general.emailConfiguration.title", "Correo electrónico"),
    ("console.configuration.general.localization.title", "Localización"),
    ("console.configuration.general.accessControl.title", "Control de acceso"),
    ("console.configuration.content.title", "Contenido"),
    ("console.configuration.content.navBar.title", "Barra de navegación"),
    ("console.configuration.content.footer.title", "Pie de página"),
    ("console.configuration.content.pages.title", "Páginas"),
    ("console.configuration.content.texts.title", "Textos"),
    ("console.configuration.content.messagingTemplates.title", "Plantillas de mensajes"),
    ("console.configuration.design.title", "Diseño"),
    ("console.configuration.design.branding.title", "Marca"),
    ("console.configuration.design.layout.title", "Disposición"),
    ("console.configuration.users.title", "Usuarios"),
    ("console.configuration.users.userTypes.title", "Tipos de usuario"),
    ("console.configuration.users.userFields.title", "Campos de usuario"),
    ("console.configuration.listings.title", "Anuncios"),
    ("console.configuration.listings.listingTypes.title", "Tipos de anuncio"),
    ("console.configuration.listings.listingCategories.title", "Categorías"),
    ("console.configuration.listings.listingFields.title", "Campos de anuncio"),
    ("console.configuration.listings.listingSearch.title", "Búsqueda"),
    ("console.configuration.transactions.title", "Transacciones"),
    ("console.configuration.transactions.commissions.title", "Comisiones"),
    ("console.configuration.transactions.minimumSize.title", "Importe mínimo"),
    // profile
    ("profile.title", "Mi perfil"),
    ("profile.subtitle", "Gestiona tu información personal y tu contraseña."),
    ("profile.basicInfo", "Información básica"),
    ("profile.changePassword", "Cambiar contraseña"),
    ("profile.name", "Nombre"),
    ("profile.email", "Correo electrónico"),
    ("profile.currentPassword", "Contraseña actual"),
    ("profile.newPassword", "Nueva contraseña"),
    ("profile.confirmPassword", "Confirmar contraseña"),
    ("profile.updatePassword", "Actualizar contraseña"),
    ("profile.showPassword", "Mostrar contraseña"),
    ("profile.hidePassword", "Ocultar contraseña"),
    ("profile.nameRequired", "El nombre no puede estar vacío."),
    ("profile.passwordRequired", "Completa todos los campos de contraseña."),
    ("profile.passwordMismatch", "Las contraseñas no coinciden."),
    ("profile.updateSuccess", "Perfil actualizado correctamente."),
    ("profile.updateError", "No se pudo actualizar el perfil."),
    ("profile.passwordUpdateSuccess", "Contraseña actualizada correctamente."),
    ("profile.passwordUpdateError", "No se pudo actualizar la contraseña."),
];

const EN: &[(&str, &str)] = &[
    // auth
    ("auth.signIn", "Sign in"),
    ("auth.login", "Log in"),
    ("auth.register", "Create administrator account"),
    ("auth.registerAction", "Register"),
    ("auth.email", "Email"),
    ("auth.emailPlaceholder", "you@example.com"),
    ("auth.password", "Password"),
    ("auth.passwordPlaceholder", "••••••••"),
    ("auth.noAccount", "Don't have an account? Register"),
    ("auth.haveAccount", "Already have an account? Sign in"),
    ("auth.recoverPassword", "Forgot your password?"),
    ("auth.recoverInstructions", "Enter your email and we will send you a link to reset your password."),
    ("auth.sendResetLink", "Send reset link"),
    ("auth.resetEmailSent", "We sent you an email with instructions to reset your password."),
    ("auth.backToLogin", "Back to sign in"),
    ("auth.emailRequired", "Enter a valid email address."),
    ("auth.passwordRequired", "Enter your password."),
    ("auth.invalidCredentials", "Incorrect email or password."),
    ("auth.emailInUse", "An account with this email already exists."),
    ("auth.weakPassword", "The password must be at least 6 characters long."),
    ("auth.notAuthorized", "This account does not have access to the admin console."),
    ("auth.unknownEmail", "There is no account with this email."),
    ("auth.providerFailure", "Could not reach the authentication service. Please try again."),
    ("auth.providerUnavailable", "The authentication service is not responding. Reload the page to retry."),
    // common
    ("common.loading", "Loading..."),
    ("common.save", "Save"),
    ("common.saving", "Saving..."),
    ("common.close", "Close"),
    // console shell
    ("console.home.title", "Admin console"),
    ("console.home.subtitle", "Pick a section from the menu to get started."),
    ("console.section.empty", "This section has no content yet."),
    ("console.notFound", "Section not found"),
    ("console.toggleSidebar", "Show or hide the menu"),
    ("console.profile", "Profile"),
    ("console.signOut", "Sign out"),
    ("console.signedInAs", "Signed in as"),
    ("console.user", "User"),
    ("console.language.es", "Español"),
    ("console.language.en", "English"),
    // navigation
    ("console.manage.title", "Manage"),
    ("console.manage.users.title", "Users"),
    ("console.manage.listings.title", "Listings"),
    ("console.manage.transactions.title", "Transactions"),
    ("console.manage.reviews.title", "Reviews"),
    ("console.configuration.title", "Configuration"),
    ("console.configuration.general.title", "General"),
    ("console.configuration.general.emailConfiguration.title", "Email"),
    ("console.configuration.general.localization.title", "Localization"),
    ("console.configuration.general.accessControl.title", "Access control"),
    ("console.configuration.content.title", "Content"),
    ("console.configuration.content.navBar.title", "Navigation bar"),
    ("console.configuration.content.footer.title", "Footer"),
    ("console.configuration.content.pages.title", "Pages"),
    ("console.configuration.content.texts.title", "Texts"),
    ("console.configuration.content.messagingTemplates.title", "Messaging templates"),
    ("console.configuration.design.title", "Design"),
    ("console.configuration.design.branding.title", "Branding"),
    ("console.configuration.design.layout.title", "Layout"),
    ("console.configuration.users.title", "Users"),
    ("console.configuration.users.userTypes.title", "User types"),
    ("console.configuration.users.userFields.title", "User fields"),
    ("console.configuration.listings.title", "Listings"),
    ("console.configuration.listings.listingTypes.title", "Listing types"),
    ("console.configuration.listings.listingCategories.title", "Categories"),
    ("console.configuration.listings.listingFields.title", "Listing fields"),
    ("console.configuration.listings.listingSearch.title", "Search"),
    ("console.configuration.transactions.title", "Transactions"),
    ("console.configuration.transactions.commissions.title", "Commissions"),
    ("console.configuration.transactions.minimumSize.title", "Minimum transaction size"),
    // profile
    ("profile.title", "My profile"),
    ("profile.subtitle", "Manage your personal information and password."),
    ("profile.basicInfo", "Basic information"),
    ("profile.changePassword", "Change password"),
    ("profile.name", "Name"),
    ("profile.email", "Email"),
    ("profile.currentPassword", "Current password"),
    ("profile.newPassword", "New password"),
    ("profile.confirmPassword", "Confirm password"),
    ("profile.updatePassword", "Update password"),
    ("profile.showPassword", "Show password"),
    ("profile.hidePassword", "Hide password"),
    ("profile.nameRequired", "The name cannot be empty."),
    ("profile.passwordRequired", "Fill in all password fields."),
    ("profile.passwordMismatch", "The passwords do not match."),
    ("profile.updateSuccess", "Profile updated successfully."),
    ("profile.updateError", "Could not update the profile."),
    ("profile.passwordUpdateSuccess", "Password updated successfully."),
    ("profile.passwordUpdateError", "Could not update the password."),
];
